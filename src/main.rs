use std::{io::BufRead, sync::Arc};

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use moviefinder::{
    app::{self, UiEvent},
    render::{HtmlRenderer, TerminalRenderer},
    Config, OmdbProvider, SearchController,
};

const EVENT_BUFFER: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with results on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moviefinder=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    if config.api_key().is_none() {
        tracing::warn!(
            "OMDb API key is not configured. Get a free key at https://www.omdbapi.com/ \
             and set MOVIEFINDER_OMDB_API_KEY (or put it in .env)"
        );
    }

    let provider = Arc::new(OmdbProvider::new(
        config.api_key().map(String::from),
        config.omdb_api_url.clone(),
    ));
    let renderer = (TerminalRenderer::stdout(), HtmlRenderer::new());
    let controller = SearchController::new(provider, renderer, config.search());

    println!("🎬 MovieFinder: type a title to search, `:open <imdb id>` for details, `:q` to quit");

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);

    // A plain thread, so a read blocked on stdin never keeps the runtime alive at exit
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read stdin");
                    break;
                }
            };
            if tx.blocking_send(UiEvent::parse(&line)).is_err() {
                break;
            }
        }
    });

    let controller = app::run(controller, rx).await;

    if let Some(path) = &config.html_snapshot {
        let (_, html) = controller.into_renderer();
        std::fs::write(path, html.page().to_document())?;
        tracing::info!(path = %path.display(), "Wrote HTML snapshot");
    }

    Ok(())
}
