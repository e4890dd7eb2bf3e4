use super::ViewRenderer;
use crate::models::{MovieDetail, MovieSummary};

/// One instruction received by a [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Loading(bool),
    Error(String),
    ClearError,
    Results(Vec<MovieSummary>),
    Empty,
    ClearResults,
    ResetResults,
    Detail(MovieDetail),
    SearchInfo(String),
}

/// Renderer that keeps every instruction in order
///
/// Used for headless runs and tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Returns and forgets everything recorded so far
    pub fn take(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    /// Latest loading flag, if loading was ever signalled
    pub fn loading(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Loading(loading) => Some(*loading),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_results(&self) -> Option<&[MovieSummary]> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Results(movies) => Some(movies.as_slice()),
            _ => None,
        })
    }

    pub fn last_detail(&self) -> Option<&MovieDetail> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Detail(detail) => Some(detail),
            _ => None,
        })
    }
}

impl ViewRenderer for RecordingRenderer {
    fn set_loading(&mut self, loading: bool) {
        self.calls.push(RenderCall::Loading(loading));
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(RenderCall::Error(message.to_string()));
    }

    fn clear_error(&mut self) {
        self.calls.push(RenderCall::ClearError);
    }

    fn render_results(&mut self, movies: &[MovieSummary]) {
        self.calls.push(RenderCall::Results(movies.to_vec()));
    }

    fn render_empty(&mut self) {
        self.calls.push(RenderCall::Empty);
    }

    fn clear_results(&mut self) {
        self.calls.push(RenderCall::ClearResults);
    }

    fn reset_results(&mut self) {
        self.calls.push(RenderCall::ResetResults);
    }

    fn render_detail(&mut self, detail: &MovieDetail) {
        self.calls.push(RenderCall::Detail(detail.clone()));
    }

    fn set_search_info(&mut self, text: &str) {
        self.calls.push(RenderCall::SearchInfo(text.to_string()));
    }
}
