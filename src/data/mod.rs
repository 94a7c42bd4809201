// SPDX-License-Identifier: MPL-2.0
//! Data sources feeding the browsing screen.
//!
//! The screen consumes two ports, [`CategorySource`] and [`SearchSource`],
//! which both deliver [`crate::domain::PodcastSummary`] records or a single
//! [`FetchError`]. The bundled adapter is [`catalog::Catalog`], an embedded
//! TOML catalog that answers both ports; tile artwork is fetched over HTTP
//! by [`artwork`].

pub mod artwork;
pub mod catalog;
pub mod source;

pub use artwork::ArtworkCache;
pub use catalog::Catalog;
pub use source::{CategorySection, CategorySource, FetchError, SearchFilters, SearchSource};
