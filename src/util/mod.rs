//! Utility helpers for courseview.

mod wrap;

pub use wrap::wrap_text;
