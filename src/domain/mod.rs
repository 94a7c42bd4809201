// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains the pure types the rest of the application is built
//! around: podcast summaries as delivered by data sources, and the fixed
//! category / language / sort taxonomies used for browsing and filtering.
//! It has no dependencies on external crates (except `std`) so the types
//! stay trivially testable.

pub mod podcast;
pub mod taxonomy;

pub use podcast::{PodcastId, PodcastSummary};
pub use taxonomy::{Category, Language, SortBy};
