//! Terminal User Interface for the course viewer.
//!
//! Renders the course as a sidebar of sections plus a content panel, with
//! keyboard navigation, incremental search, and progress persistence.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, InputMode};
