// SPDX-License-Identifier: MPL-2.0
//! Top-level messages consumed by [`App::update`](super::App::update).

use crate::data::{CategorySection, FetchError};
use crate::domain::{Category, Language, PodcastSummary, SortBy};
use iced::widget::image;
use iced::Size;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// A keystroke in the search input (raw text, not yet committed).
    QueryEdited(String),
    /// The explicit clear action: resets to browsing immediately.
    QueryCleared,
    /// Debounce clock; checks whether the pending deadline fired.
    DebounceTick(Instant),
    /// Skeleton animation clock.
    PulseTick(Instant),
    CategorySelected(Category),
    /// Category feed completed for the given fetch generation.
    BrowseLoaded {
        generation: u64,
        result: Result<Vec<CategorySection>, FetchError>,
    },
    /// Search feed completed for the given fetch generation.
    SearchLoaded {
        generation: u64,
        result: Result<Vec<PodcastSummary>, FetchError>,
    },
    FilterModalOpened,
    /// Emitted by both the Apply button and the backdrop; filters already
    /// took effect live, so this only closes the modal.
    FilterModalClosed,
    SortSelected(SortBy),
    LanguageToggled(Language),
    TranscriptToggled,
    /// A tile was activated; navigates to the podcast detail screen.
    PodcastOpened(PodcastSummary),
    DetailClosed,
    /// Artwork download finished; `None` marks the URL as failed.
    ArtworkLoaded {
        url: String,
        handle: Option<image::Handle>,
    },
    WindowResized(Size),
}
