// SPDX-License-Identifier: MPL-2.0
//! Embedded podcast catalog answering both data-source ports.
//!
//! The catalog ships as a TOML document embedded at compile time (the same
//! `rust-embed` pattern used for the i18n bundles) and can be replaced at
//! startup with a file passed on the command line. Lookups are all in-memory;
//! a small simulated latency is applied by the update loop so loading states
//! stay observable.

use crate::domain::{Category, Language, PodcastId, PodcastSummary, SortBy};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

use super::source::{CategorySection, CategorySource, FetchError, SearchFilters, SearchSource};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const EMBEDDED_CATALOG: &str = "podcasts.toml";

/// Artificial delay before a fetch resolves, applied by the async wrapper
/// in the update loop.
pub const FETCH_LATENCY: Duration = Duration::from_millis(350);

/// One catalog record. The summary is what crosses the port boundary; the
/// remaining fields only drive filtering and ranking inside the adapter.
#[derive(Debug, Clone)]
struct CatalogEntry {
    summary: PodcastSummary,
    category: Category,
    languages: BTreeSet<Language>,
    popularity: u32,
    transcript: bool,
}

mod raw {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Document {
        #[serde(default)]
        pub podcasts: Vec<Entry>,
    }

    #[derive(Deserialize)]
    pub struct Entry {
        pub id: String,
        pub title: String,
        pub author: String,
        pub image: String,
        pub category: String,
        pub languages: Vec<String>,
        pub popularity: u32,
        #[serde(default)]
        pub transcript: bool,
    }
}

/// In-memory podcast catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Loads the catalog bundled into the executable.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_CATALOG)
            .ok_or_else(|| Error::Catalog(format!("embedded {} missing", EMBEDDED_CATALOG)))?;
        let content = String::from_utf8_lossy(file.data.as_ref()).to_string();
        Self::from_toml(&content)
    }

    /// Loads a replacement catalog from disk (the optional CLI argument).
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let document: raw::Document = toml::from_str(content)?;
        let mut entries = Vec::with_capacity(document.podcasts.len());
        for entry in document.podcasts {
            entries.push(Self::convert(entry)?);
        }
        Ok(Self { entries })
    }

    fn convert(entry: raw::Entry) -> Result<CatalogEntry> {
        let category = Category::from_slug(&entry.category)
            .filter(|c| *c != Category::All)
            .ok_or_else(|| {
                Error::Catalog(format!(
                    "'{}': unknown category '{}'",
                    entry.id, entry.category
                ))
            })?;

        let mut languages = BTreeSet::new();
        for code in &entry.languages {
            let language = Language::from_code(code).ok_or_else(|| {
                Error::Catalog(format!("'{}': unknown language '{}'", entry.id, code))
            })?;
            languages.insert(language);
        }
        if languages.is_empty() {
            return Err(Error::Catalog(format!("'{}': no languages", entry.id)));
        }

        Ok(CatalogEntry {
            summary: PodcastSummary {
                id: PodcastId::new(entry.id),
                title: entry.title,
                author: entry.author,
                image_url: entry.image,
            },
            category,
            languages,
            popularity: entry.popularity,
            transcript: entry.transcript,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn section(&self, category: Category) -> CategorySection {
        let mut entries: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|e| e.category == category)
            .collect();
        // Browsing always surfaces the most popular podcasts first.
        entries.sort_by(|a, b| {
            b.popularity
                .cmp(&a.popularity)
                .then_with(|| a.summary.title.cmp(&b.summary.title))
        });
        CategorySection {
            category,
            items: entries.into_iter().map(|e| e.summary.clone()).collect(),
        }
    }
}

impl CategorySource for Catalog {
    fn fetch(&self, category: Option<Category>) -> std::result::Result<Vec<CategorySection>, FetchError> {
        match category {
            Some(category) => Ok(vec![self.section(category)]),
            None => Ok(Category::ALL
                .into_iter()
                .filter_map(|c| c.as_filter())
                .map(|c| self.section(c))
                .filter(|section| !section.items.is_empty())
                .collect()),
        }
    }
}

impl SearchSource for Catalog {
    fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> std::result::Result<Vec<PodcastSummary>, FetchError> {
        let needle = query.to_lowercase();

        let mut matches: Vec<(usize, &CatalogEntry)> = self
            .entries
            .iter()
            .filter(|e| e.languages.iter().any(|l| filters.languages.contains(l)))
            .filter(|e| !filters.has_transcript || e.transcript)
            .filter_map(|e| match_score(e, &needle).map(|score| (score, e)))
            .collect();

        match filters.sort_by {
            SortBy::Exactness => matches.sort_by(|(sa, a), (sb, b)| {
                sa.cmp(sb).then_with(|| a.summary.title.cmp(&b.summary.title))
            }),
            SortBy::Popularity => matches.sort_by(|(_, a), (_, b)| {
                b.popularity
                    .cmp(&a.popularity)
                    .then_with(|| a.summary.title.cmp(&b.summary.title))
            }),
        }

        Ok(matches.into_iter().map(|(_, e)| e.summary.clone()).collect())
    }
}

/// Rank of a match for `Exactness` ordering: earlier title matches beat
/// later ones, and any title match beats an author-only match.
fn match_score(entry: &CatalogEntry, needle: &str) -> Option<usize> {
    const AUTHOR_OFFSET: usize = 10_000;
    let title = entry.summary.title.to_lowercase();
    if let Some(position) = title.find(needle) {
        return Some(position);
    }
    let author = entry.summary.author.to_lowercase();
    author.find(needle).map(|position| AUTHOR_OFFSET + position)
}
