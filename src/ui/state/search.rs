// SPDX-License-Identifier: MPL-2.0
//! Debounced search state machine.
//!
//! Raw query edits never take effect immediately: each edit (re)arms a
//! single 500 ms deadline, replacing any pending one (cancel-and-replace,
//! never a queue). Only when the deadline fires does the debounced query
//! update, and only a debounced query of at least 3 characters switches the
//! screen into search mode. The explicit clear action is the one fast path
//! that bypasses the delay.
//!
//! The state machine is driven with explicit [`Instant`]s so it can be
//! exercised in tests without sleeping.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the query being committed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Minimum committed query length (in characters) for search mode.
pub const MIN_QUERY_CHARS: usize = 3;

/// The three mutually exclusive modes of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Category browsing; the category feed owns the results area.
    Browsing,
    /// A deadline is pending and no committed query is active yet.
    Debouncing,
    /// The committed query reached the threshold; the search feed owns the
    /// results area.
    Searching,
}

/// Raw and debounced query text plus the pending debounce deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    raw: String,
    debounced: String,
    deadline: Option<Instant>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            raw: String::new(),
            debounced: String::new(),
            deadline: None,
        }
    }
}

impl SearchState {
    /// Text currently shown in the input widget.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Last committed query.
    pub fn debounced(&self) -> &str {
        &self.debounced
    }

    /// Whether a debounce deadline is pending (drives the tick subscription).
    pub fn is_debouncing(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn mode(&self) -> SearchMode {
        if self.is_active() {
            SearchMode::Searching
        } else if self.deadline.is_some() {
            SearchMode::Debouncing
        } else {
            SearchMode::Browsing
        }
    }

    /// Search mode is active iff the committed query has at least
    /// [`MIN_QUERY_CHARS`] characters. Raw input length is irrelevant.
    pub fn is_active(&self) -> bool {
        self.debounced.chars().count() >= MIN_QUERY_CHARS
    }

    /// Records a keystroke at `now`, rearming the deadline. Any previously
    /// pending deadline is discarded.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.raw = text.into();
        self.deadline = Some(now + DEBOUNCE_DELAY);
    }

    /// Advances the machine to `now`. Returns `true` when the pending
    /// deadline fired and the debounced query changed as a result.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.debounced != self.raw {
                    self.debounced = self.raw.clone();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Explicit fast path: resets raw and debounced text and returns to
    /// browsing immediately, discarding any pending deadline.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.debounced.clear();
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn starts_browsing_with_empty_queries() {
        let state = SearchState::default();
        assert_eq!(state.mode(), SearchMode::Browsing);
        assert_eq!(state.raw(), "");
        assert_eq!(state.debounced(), "");
    }

    #[test]
    fn rapid_keystrokes_commit_exactly_once() {
        let start = t0();
        let mut state = SearchState::default();

        state.edit("a", start);
        state.edit("ab", start + Duration::from_millis(120));
        state.edit("abc", start + Duration::from_millis(240));

        // Nothing committed before the last deadline.
        assert!(!state.poll(start + Duration::from_millis(500)));
        assert_eq!(state.debounced(), "");

        // The single rearmed deadline fires once, with the final text.
        assert!(state.poll(start + Duration::from_millis(740)));
        assert_eq!(state.debounced(), "abc");

        // No further commits without new input.
        assert!(!state.poll(start + Duration::from_millis(2000)));
    }

    #[test]
    fn two_chars_stay_in_browsing_three_activate_search() {
        let start = t0();
        let mut state = SearchState::default();

        state.edit("ab", start);
        state.poll(start + DEBOUNCE_DELAY);
        assert_eq!(state.mode(), SearchMode::Browsing);

        state.edit("abc", start + Duration::from_secs(1));
        state.poll(start + Duration::from_secs(1) + DEBOUNCE_DELAY);
        assert_eq!(state.mode(), SearchMode::Searching);
    }

    #[test]
    fn mode_is_debouncing_while_deadline_pends_below_threshold() {
        let start = t0();
        let mut state = SearchState::default();
        state.edit("a", start);
        assert_eq!(state.mode(), SearchMode::Debouncing);
    }

    #[test]
    fn active_search_stays_active_while_retyping() {
        let start = t0();
        let mut state = SearchState::default();
        state.edit("jazz", start);
        state.poll(start + DEBOUNCE_DELAY);
        assert_eq!(state.mode(), SearchMode::Searching);

        // Further typing keeps showing the committed results until the new
        // deadline fires.
        state.edit("jazz h", start + Duration::from_secs(1));
        assert_eq!(state.mode(), SearchMode::Searching);
        assert_eq!(state.debounced(), "jazz");
    }

    #[test]
    fn clear_resets_immediately_without_waiting() {
        let start = t0();
        let mut state = SearchState::default();
        state.edit("abcdef", start);
        state.poll(start + DEBOUNCE_DELAY);
        assert_eq!(state.mode(), SearchMode::Searching);

        state.clear();
        assert_eq!(state.mode(), SearchMode::Browsing);
        assert_eq!(state.raw(), "");
        assert_eq!(state.debounced(), "");
        assert!(!state.is_debouncing());
    }

    #[test]
    fn poll_reports_false_when_text_is_unchanged() {
        let start = t0();
        let mut state = SearchState::default();
        state.edit("abc", start);
        assert!(state.poll(start + DEBOUNCE_DELAY));

        // Retype the same text; the deadline fires but nothing changed.
        state.edit("abc", start + Duration::from_secs(1));
        assert!(!state.poll(start + Duration::from_secs(1) + DEBOUNCE_DELAY));
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        let start = t0();
        let mut state = SearchState::default();
        state.edit("héé", start);
        state.poll(start + DEBOUNCE_DELAY);
        assert_eq!(state.mode(), SearchMode::Searching);
    }
}
