//! courseview - Interactive terminal viewer for course documents.
//!
//! This library provides the core functionality behind the `courseview`
//! binary: the course document model, the UI-agnostic view state with its
//! command handlers, progress persistence, and the TUI front-end.

pub mod content;
pub mod export;
pub mod persist;
pub mod tui;
pub mod util;
pub mod view;
