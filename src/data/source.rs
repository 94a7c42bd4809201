// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the two podcast data sources.
//!
//! These traits use only domain types, so the screen stays independent of
//! the concrete adapter behind them. Methods are synchronous; callers wrap
//! them in an Iced `Task` to get off the UI thread.
//!
//! The two sources are mutually exclusive consumers of the results area:
//! whichever one the search orchestrator marks active is the only one whose
//! loading/error/ready status the screen observes.

use crate::domain::{Category, Language, PodcastSummary, SortBy};
use std::collections::BTreeSet;
use std::fmt;

/// The single error kind either data source can surface.
///
/// The screen renders it as a static, non-interactive error view; it is
/// never retried automatically and never propagated further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError(String);

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed: {}", self.0)
    }
}

impl std::error::Error for FetchError {}

/// One carousel section of the browsing layout: a category heading plus the
/// podcasts filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category: Category,
    pub items: Vec<PodcastSummary>,
}

/// Filter configuration handed to the search source, assembled from the
/// live [`crate::ui::state::FilterState`] by the update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub sort_by: SortBy,
    pub languages: BTreeSet<Language>,
    pub has_transcript: bool,
}

/// Browsing feed: podcasts grouped into category sections.
///
/// `category: None` means the unfiltered default set — one section per
/// non-empty category. `Some(c)` yields the single section for `c`.
pub trait CategorySource {
    fn fetch(&self, category: Option<Category>) -> Result<Vec<CategorySection>, FetchError>;
}

/// Search feed over the whole catalog.
///
/// Must not be invoked for queries shorter than the activation threshold
/// ([`crate::ui::state::search::MIN_QUERY_CHARS`]); the orchestrator
/// guarantees that.
pub trait SearchSource {
    fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<PodcastSummary>, FetchError>;
}
