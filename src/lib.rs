//! Debounced movie search against the OMDb API.
//!
//! A [`SearchController`] turns search-box input into at most one provider call
//! per settled query and maps each outcome onto a [`ViewRenderer`]. The
//! [`app::run`] loop drives it from a stream of [`app::UiEvent`]s.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;

pub use config::{Config, SearchConfig};
pub use error::{AppError, AppResult, ErrorKind};
pub use render::ViewRenderer;
pub use services::{MovieProvider, OmdbProvider, SearchController};
