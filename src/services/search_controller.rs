use std::sync::Arc;

use crate::{
    config::SearchConfig,
    error::{AppResult, ErrorKind},
    models::{MovieDetail, MovieSummary, SearchPage},
    render::ViewRenderer,
    services::{debounce::DebounceTimer, providers::MovieProvider},
};

/// Only the first page of results is ever requested
pub const FIRST_PAGE: u32 = 1;

/// How a search ended
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results {
        movies: Vec<MovieSummary>,
        total_results: u32,
    },
    Empty,
    Error(String),
}

/// Lifecycle of the current search
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Pending(String),
    Settled(String, SearchOutcome),
}

/// Tag attached to an issued search
///
/// Only the ticket with the latest generation may update the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Turns keystrokes into debounced searches and maps their results onto the view
///
/// Owns the search state, the single debounce timer, and the ticket counter;
/// the provider and renderer are injected.
pub struct SearchController<R: ViewRenderer> {
    config: SearchConfig,
    provider: Arc<dyn MovieProvider>,
    renderer: R,
    state: SearchState,
    timer: DebounceTimer,
    generation: u64,
}

impl<R: ViewRenderer> SearchController<R> {
    pub fn new(provider: Arc<dyn MovieProvider>, renderer: R, config: SearchConfig) -> Self {
        Self {
            timer: DebounceTimer::new(config.debounce),
            config,
            provider,
            renderer,
            state: SearchState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn provider(&self) -> Arc<dyn MovieProvider> {
        Arc::clone(&self.provider)
    }

    /// The debounced query waiting to be sent, if any
    pub fn pending_query(&self) -> Option<&str> {
        self.timer.pending_query()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_pending()
    }

    /// Handles the full current text of the search box
    pub fn on_input(&mut self, raw: &str) {
        let query = raw.trim();

        if query.chars().count() < self.config.min_query_len {
            self.reset();
            return;
        }

        if let Some(replaced) = self.timer.schedule(query.to_string()) {
            tracing::trace!(replaced = %replaced, query = %query, "Debounced query replaced");
        }
    }

    /// Synchronous return to `Idle`, discarding whatever is scheduled or in flight
    fn reset(&mut self) {
        self.timer.cancel();
        // Any in-flight search now carries a stale ticket
        self.generation += 1;
        self.state = SearchState::Idle;

        self.renderer.reset_results();
        self.renderer.clear_error();
        self.renderer.set_loading(false);
    }

    /// Waits for the debounce timer and returns the query it was holding
    pub async fn timer_fired(&mut self) -> String {
        self.timer.fired().await
    }

    /// Runs a search to completion on the current task
    pub async fn search(&mut self, query: &str) {
        let ticket = self.begin_search(query);
        let result = self.provider.search_movies(ticket.query(), FIRST_PAGE).await;
        self.finish_search(ticket, result);
    }

    /// Enters `Pending` and issues a ticket for the provider call
    pub fn begin_search(&mut self, query: &str) -> SearchTicket {
        self.generation += 1;
        self.state = SearchState::Pending(query.to_string());

        self.renderer.set_loading(true);
        self.renderer.clear_error();

        tracing::debug!(query = %query, generation = self.generation, "Search started");

        SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        }
    }

    /// Applies a provider result. Returns `false` when the ticket is stale.
    pub fn finish_search(&mut self, ticket: SearchTicket, result: AppResult<SearchPage>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                query = %ticket.query,
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale search result"
            );
            return false;
        }

        let outcome = match result {
            Ok(page) if !page.items.is_empty() => {
                self.renderer.render_results(&page.items);
                self.renderer
                    .set_search_info(&format!("Found: {} results", page.total_results));
                SearchOutcome::Results {
                    movies: page.items,
                    total_results: page.total_results,
                }
            }
            Ok(_) => {
                self.renderer.render_empty();
                SearchOutcome::Empty
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(query = %ticket.query, "No titles matched");
                self.renderer.render_empty();
                SearchOutcome::Empty
            }
            Err(e) => {
                tracing::warn!(query = %ticket.query, error = %e, "Search failed");
                let message = e.user_message();
                self.renderer.show_error(&message);
                self.renderer.clear_results();
                SearchOutcome::Error(message)
            }
        };

        self.renderer.set_loading(false);
        self.state = SearchState::Settled(ticket.query, outcome);
        true
    }

    /// Fetches and shows the detail of one title on the current task
    pub async fn select_movie(&mut self, id: &str) {
        self.begin_detail(id);
        let result = self.provider.movie_detail(id).await;
        self.finish_detail(id, result);
    }

    pub fn begin_detail(&mut self, id: &str) {
        tracing::debug!(id = %id, "Detail requested");
        self.renderer.set_loading(true);
        self.renderer.clear_error();
    }

    pub fn finish_detail(&mut self, id: &str, result: AppResult<MovieDetail>) {
        match result {
            Ok(detail) => self.renderer.render_detail(&detail),
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Detail fetch failed");
                self.renderer.show_error(&e.user_message());
                self.renderer.clear_results();
                // The result list is gone, but a search already in flight still owns the view
                if !matches!(self.state, SearchState::Pending(_)) {
                    self.state = SearchState::Idle;
                }
            }
        }

        self.renderer.set_loading(false);
    }
}
