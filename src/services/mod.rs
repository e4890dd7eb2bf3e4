pub mod debounce;
pub mod providers;
pub mod search_controller;

pub use debounce::DebounceTimer;
pub use providers::{MovieProvider, OmdbProvider};
pub use search_controller::{SearchController, SearchOutcome, SearchState, SearchTicket};
