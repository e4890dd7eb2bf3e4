//! Event loop driving a [`SearchController`]
//!
//! Input events, the controller's debounce timer and in-flight provider calls
//! are multiplexed on a single task. Provider calls run as spawned tasks so a
//! slow response never holds up the next keystroke.

use tokio::{sync::mpsc, task::JoinSet};

use crate::{
    error::AppResult,
    models::{MovieDetail, SearchPage},
    render::ViewRenderer,
    services::search_controller::{SearchController, SearchTicket, FIRST_PAGE},
};

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Full current text of the search box
    Input(String),
    /// Open the detail of the title with this IMDb ID
    Select(String),
    Quit,
}

impl UiEvent {
    /// Parses one line of terminal input
    ///
    /// `:q` / `:quit` quit, `:open <id>` / `:o <id>` select, anything else is
    /// treated as the new search text.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        match trimmed {
            ":q" | ":quit" => UiEvent::Quit,
            _ => {
                let selected = trimmed
                    .strip_prefix(":open ")
                    .or_else(|| trimmed.strip_prefix(":o "))
                    .map(str::trim)
                    .filter(|id| !id.is_empty());

                match selected {
                    Some(id) => UiEvent::Select(id.to_string()),
                    None => UiEvent::Input(line.to_string()),
                }
            }
        }
    }
}

/// Runs until `Quit` arrives, or until the event channel closes and all
/// scheduled and in-flight work has settled. Returns the controller so the
/// caller can inspect its final state.
pub async fn run<R: ViewRenderer>(
    mut controller: SearchController<R>,
    mut events: mpsc::Receiver<UiEvent>,
) -> SearchController<R> {
    let mut searches: JoinSet<(SearchTicket, AppResult<SearchPage>)> = JoinSet::new();
    let mut details: JoinSet<(String, AppResult<MovieDetail>)> = JoinSet::new();
    let mut input_open = true;

    loop {
        if !input_open
            && !controller.has_pending_timer()
            && searches.is_empty()
            && details.is_empty()
        {
            break;
        }

        tokio::select! {
            event = events.recv(), if input_open => match event {
                Some(UiEvent::Input(text)) => controller.on_input(&text),
                Some(UiEvent::Select(id)) => {
                    controller.begin_detail(&id);
                    let provider = controller.provider();
                    details.spawn(async move {
                        let result = provider.movie_detail(&id).await;
                        (id, result)
                    });
                }
                Some(UiEvent::Quit) => {
                    tracing::info!("Quit requested");
                    break;
                }
                None => {
                    tracing::debug!("Input closed, draining pending work");
                    input_open = false;
                }
            },
            query = controller.timer_fired() => {
                let ticket = controller.begin_search(&query);
                let provider = controller.provider();
                searches.spawn(async move {
                    let result = provider.search_movies(ticket.query(), FIRST_PAGE).await;
                    (ticket, result)
                });
            }
            Some(joined) = searches.join_next(), if !searches.is_empty() => match joined {
                Ok((ticket, result)) => {
                    controller.finish_search(ticket, result);
                }
                Err(e) => tracing::error!(error = %e, "Search task failed"),
            },
            Some(joined) = details.join_next(), if !details.is_empty() => match joined {
                Ok((id, result)) => controller.finish_detail(&id, result),
                Err(e) => tracing::error!(error = %e, "Detail task failed"),
            },
        }
    }

    controller
}
