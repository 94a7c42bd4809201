// SPDX-License-Identifier: MPL-2.0
//! Podcast summary records as read from data sources.

use std::fmt;

/// Opaque podcast identifier.
///
/// The screen never interprets the value; it only passes it back to data
/// sources and the detail destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PodcastId(String);

impl PodcastId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PodcastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The slice of a podcast the browsing screen reads.
///
/// Owned and supplied by the data sources; the UI never mutates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodcastSummary {
    pub id: PodcastId,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podcast_id_displays_raw_value() {
        let id = PodcastId::new("pod-042");
        assert_eq!(id.to_string(), "pod-042");
        assert_eq!(id.as_str(), "pod-042");
    }
}
