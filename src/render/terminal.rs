use std::io::Write;

use super::ViewRenderer;
use crate::models::{MovieDetail, MovieSummary};

/// Line-oriented renderer for interactive terminal use
pub struct TerminalRenderer<W: Write> {
    out: W,
    loading: bool,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            loading: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write> ViewRenderer for TerminalRenderer<W> {
    fn set_loading(&mut self, loading: bool) {
        if loading && !self.loading {
            self.line("Searching…");
        }
        self.loading = loading;
    }

    fn show_error(&mut self, message: &str) {
        self.line(&format!("⚠️  {}", message));
    }

    // Nothing to erase on a scrolling terminal
    fn clear_error(&mut self) {}

    fn render_results(&mut self, movies: &[MovieSummary]) {
        for (index, movie) in movies.iter().enumerate() {
            let line = format!(
                "{:>2}. {} ({}) [{}] {}",
                index + 1,
                movie.title,
                movie.year,
                movie.kind,
                movie.id
            );
            self.line(&line);
        }
    }

    fn render_empty(&mut self) {
        self.line("No movies found.");
    }

    fn clear_results(&mut self) {}

    fn reset_results(&mut self) {}

    fn render_detail(&mut self, detail: &MovieDetail) {
        self.line("");
        self.line(&format!("== {} ==", detail.title));

        let rating = detail.rating_line();
        let fields = [
            ("Year", detail.year.as_deref()),
            ("Rating", rating.as_deref()),
            ("Runtime", detail.runtime.as_deref()),
            ("Rated", detail.rated.as_deref()),
            ("Genre", detail.genre.as_deref()),
            ("Director", detail.director.as_deref()),
            ("Writer", detail.writer.as_deref()),
            ("Cast", detail.actors.as_deref()),
            ("Awards", detail.awards.as_deref()),
            ("Languages", detail.language.as_deref()),
            ("Countries", detail.country.as_deref()),
            ("Plot", detail.plot.as_deref()),
        ];

        for (label, value) in fields {
            if let Some(value) = value {
                self.line(&format!("{:<10} {}", format!("{}:", label), value));
            }
        }
        self.line("");
    }

    fn set_search_info(&mut self, text: &str) {
        if !text.is_empty() {
            self.line(text);
        }
    }
}
