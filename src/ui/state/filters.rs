// SPDX-License-Identifier: MPL-2.0
//! Search filter state: sort mode, feed languages, transcript flag.
//!
//! All operations are infallible; invalid toggles (removing the last
//! remaining language) are silently ignored rather than raising errors.

use crate::domain::{Language, SortBy};
use std::collections::BTreeSet;

/// Filters applied to search results, edited live from the filter modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    sort_by: SortBy,
    languages: BTreeSet<Language>,
    has_transcript: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sort_by: SortBy::default(),
            languages: BTreeSet::from([Language::English]),
            has_transcript: false,
        }
    }
}

impl FilterState {
    /// Starts from defaults but pre-selects the given languages.
    /// Falls back to the default set when `languages` is empty, preserving
    /// the non-empty invariant.
    pub fn with_languages(languages: impl IntoIterator<Item = Language>) -> Self {
        let languages: BTreeSet<Language> = languages.into_iter().collect();
        if languages.is_empty() {
            Self::default()
        } else {
            Self {
                languages,
                ..Self::default()
            }
        }
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn languages(&self) -> &BTreeSet<Language> {
        &self.languages
    }

    pub fn has_transcript(&self) -> bool {
        self.has_transcript
    }

    /// Replaces the sort mode unconditionally.
    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    /// Adds the language if absent; removes it if present, unless it is the
    /// sole remaining entry, in which case nothing happens. The language set
    /// never becomes empty.
    pub fn toggle_language(&mut self, language: Language) {
        if self.languages.contains(&language) {
            if self.languages.len() > 1 {
                self.languages.remove(&language);
            }
        } else {
            self.languages.insert(language);
        }
    }

    /// Flips the transcript-only flag.
    pub fn toggle_has_transcript(&mut self) {
        self.has_transcript = !self.has_transcript;
    }

    /// Number of filters deviating from their defaults, shown as the badge
    /// on the filter trigger.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if self.sort_by != SortBy::Exactness {
            count += 1;
        }
        if self.languages.len() > 1 {
            count += 1;
        }
        if self.has_transcript {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_english_only_and_no_active_filters() {
        let state = FilterState::default();
        assert_eq!(state.sort_by(), SortBy::Exactness);
        assert_eq!(
            state.languages().iter().copied().collect::<Vec<_>>(),
            vec![Language::English]
        );
        assert!(!state.has_transcript());
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn removing_the_sole_language_is_a_no_op() {
        let mut state = FilterState::default();
        state.toggle_language(Language::English);
        assert!(state.languages().contains(&Language::English));
        assert_eq!(state.languages().len(), 1);
    }

    #[test]
    fn removing_one_of_two_languages_succeeds() {
        let mut state = FilterState::default();
        state.toggle_language(Language::Spanish);
        assert_eq!(state.languages().len(), 2);

        state.toggle_language(Language::English);
        assert_eq!(
            state.languages().iter().copied().collect::<Vec<_>>(),
            vec![Language::Spanish]
        );
    }

    #[test]
    fn toggling_an_absent_language_adds_it() {
        let mut state = FilterState::default();
        state.toggle_language(Language::Japanese);
        assert!(state.languages().contains(&Language::Japanese));
    }

    #[test]
    fn active_filter_count_reflects_each_deviation() {
        let mut state = FilterState::default();
        state.set_sort_by(SortBy::Popularity);
        state.toggle_language(Language::Spanish);
        state.toggle_has_transcript();
        assert_eq!(state.active_filter_count(), 3);
    }

    #[test]
    fn transcript_flag_flips_back_and_forth() {
        let mut state = FilterState::default();
        state.toggle_has_transcript();
        assert!(state.has_transcript());
        state.toggle_has_transcript();
        assert!(!state.has_transcript());
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn with_languages_ignores_an_empty_set() {
        let state = FilterState::with_languages([]);
        assert_eq!(state.languages().len(), 1);

        let state = FilterState::with_languages([Language::French, Language::German]);
        assert_eq!(state.languages().len(), 2);
    }
}
