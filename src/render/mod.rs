//! Presentation layer
//!
//! The search controller never touches output directly; it issues declarative
//! instructions through [`ViewRenderer`].

use crate::models::{MovieDetail, MovieSummary};

pub mod html;
pub mod recording;
pub mod terminal;

pub use html::{escape_html, HtmlRenderer, Page};
pub use recording::{RecordingRenderer, RenderCall};
pub use terminal::TerminalRenderer;

/// Receives display instructions from the search controller
pub trait ViewRenderer {
    fn set_loading(&mut self, loading: bool);

    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);

    /// Replaces the result area with the given summaries
    fn render_results(&mut self, movies: &[MovieSummary]);

    /// Empties the result area and shows the "nothing found" state
    fn render_empty(&mut self);

    /// Empties the result area and search info without the "nothing found" state
    fn clear_results(&mut self);

    /// Returns the result area to its idle look: no results, no search info,
    /// the "nothing found" placeholder visible
    fn reset_results(&mut self);

    fn render_detail(&mut self, detail: &MovieDetail);

    fn set_search_info(&mut self, text: &str);
}

/// Forwards every instruction to both renderers, left first
impl<A: ViewRenderer, B: ViewRenderer> ViewRenderer for (A, B) {
    fn set_loading(&mut self, loading: bool) {
        self.0.set_loading(loading);
        self.1.set_loading(loading);
    }

    fn show_error(&mut self, message: &str) {
        self.0.show_error(message);
        self.1.show_error(message);
    }

    fn clear_error(&mut self) {
        self.0.clear_error();
        self.1.clear_error();
    }

    fn render_results(&mut self, movies: &[MovieSummary]) {
        self.0.render_results(movies);
        self.1.render_results(movies);
    }

    fn render_empty(&mut self) {
        self.0.render_empty();
        self.1.render_empty();
    }

    fn clear_results(&mut self) {
        self.0.clear_results();
        self.1.clear_results();
    }

    fn reset_results(&mut self) {
        self.0.reset_results();
        self.1.reset_results();
    }

    fn render_detail(&mut self, detail: &MovieDetail) {
        self.0.render_detail(detail);
        self.1.render_detail(detail);
    }

    fn set_search_info(&mut self, text: &str) {
        self.0.set_search_info(text);
        self.1.set_search_info(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_forwards_to_both() {
        let mut pair = (RecordingRenderer::new(), RecordingRenderer::new());
        pair.set_loading(true);
        pair.show_error("boom");

        let expected = vec![
            RenderCall::Loading(true),
            RenderCall::Error("boom".to_string()),
        ];
        assert_eq!(pair.0.calls(), expected.as_slice());
        assert_eq!(pair.1.calls(), expected.as_slice());
    }
}
