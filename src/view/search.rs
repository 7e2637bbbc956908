//! Search term debouncing.
//!
//! Filtering runs at most once per quiescent burst of keystrokes: every
//! input re-arms a single pending deadline, and the term is released only
//! once the deadline has passed (trailing debounce). The event-loop tick
//! drives [`Debouncer::poll`].

use std::time::{Duration, Instant};

/// Quiescence window before a filter pass runs.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);

/// Terms shorter than this clear the filter instead of applying one.
pub const MIN_FILTER_LEN: usize = 2;

/// Trailing debouncer holding at most one pending term.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a keystroke, replacing any pending term and restarting the
    /// quiescence window from `now`.
    pub fn input(&mut self, term: &str, now: Instant) {
        self.pending = Some((term.to_string(), now + DEBOUNCE_INTERVAL));
    }

    /// Releases the pending term if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => {
                self.pending.take().map(|(term, _)| term)
            }
            _ => None,
        }
    }

    /// Drops any pending term without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
