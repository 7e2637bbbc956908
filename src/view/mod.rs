//! UI-agnostic view state and command handlers.
//!
//! Everything the TUI mutates lives in [`ViewState`]; the command methods
//! (`select_section`, `select_tab`, `toggle_layer`, `apply_filter`, ...)
//! take plain inputs and can be exercised in tests without a terminal.

mod search;
mod state;

pub use search::{DEBOUNCE_INTERVAL, Debouncer, MIN_FILTER_LEN};
pub use state::{Item, REVEAL_FRAMES, TabBlockState, ViewState};
