// SPDX-License-Identifier: MPL-2.0
//! Feed lifecycle for the two podcast data sources.
//!
//! A [`Feed`] is a tagged union over the states the results area can be in,
//! so impossible combinations (error and results at once, search skeleton
//! over browse data) cannot be represented. Each fetch carries a generation
//! number; completions from superseded fetches are discarded, which also
//! covers the inactive source finishing while the other one owns the screen.

use crate::data::FetchError;
use crate::ui::state::SkeletonPulse;
use std::time::Instant;

/// Display classification of a feed.
#[derive(Debug, Clone)]
pub enum Phase<T> {
    /// No fetch has produced anything yet (startup, or reset after a clear).
    Idle,
    /// Fetch in flight; the pulse anchors the skeleton animation.
    Loading { pulse: SkeletonPulse },
    /// The fetch failed. Rendered statically; never retried automatically.
    Failed,
    /// Fetch completed. An empty payload renders the empty state.
    Ready(T),
}

#[derive(Debug, Clone)]
pub struct Feed<T> {
    phase: Phase<T>,
    generation: u64,
}

impl<T> Feed<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Starts a new fetch: bumps the generation (invalidating any in-flight
    /// one) and shows the skeleton. Returns the token the completion must
    /// present to [`resolve`](Self::resolve).
    pub fn begin(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading {
            pulse: SkeletonPulse::starting_at(now),
        };
        self.generation
    }

    /// Applies a fetch outcome. Completions are only accepted while their
    /// generation is still the loading one; anything else (stale generation,
    /// feed already settled or reset) is ignored. Returns whether the
    /// outcome was applied.
    pub fn resolve(&mut self, generation: u64, result: Result<T, FetchError>) -> bool {
        if generation != self.generation || !self.is_loading() {
            return false;
        }
        self.phase = match result {
            Ok(payload) => Phase::Ready(payload),
            Err(_) => Phase::Failed,
        };
        true
    }

    /// Returns to [`Phase::Idle`], invalidating any in-flight fetch.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
    }
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_then_resolve_reaches_ready() {
        let mut feed: Feed<Vec<u8>> = Feed::new();
        let generation = feed.begin(Instant::now());
        assert!(feed.is_loading());

        assert!(feed.resolve(generation, Ok(vec![1, 2])));
        assert!(matches!(feed.phase(), Phase::Ready(items) if items.len() == 2));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut feed: Feed<Vec<u8>> = Feed::new();
        let stale = feed.begin(Instant::now());
        let fresh = feed.begin(Instant::now());

        assert!(!feed.resolve(stale, Ok(vec![9])));
        assert!(feed.is_loading());

        assert!(feed.resolve(fresh, Ok(vec![1])));
        assert!(matches!(feed.phase(), Phase::Ready(items) if items == &vec![1]));
    }

    #[test]
    fn reset_invalidates_the_in_flight_fetch() {
        let mut feed: Feed<Vec<u8>> = Feed::new();
        let generation = feed.begin(Instant::now());
        feed.reset();

        assert!(!feed.resolve(generation, Ok(vec![1])));
        assert!(matches!(feed.phase(), Phase::Idle));
    }

    #[test]
    fn failure_lands_in_failed_and_sticks() {
        let mut feed: Feed<Vec<u8>> = Feed::new();
        let generation = feed.begin(Instant::now());
        assert!(feed.resolve(generation, Err(FetchError::new("boom"))));
        assert!(matches!(feed.phase(), Phase::Failed));

        // A later stale success cannot resurrect it.
        assert!(!feed.resolve(generation, Ok(vec![1])));
        assert!(matches!(feed.phase(), Phase::Failed));
    }
}
