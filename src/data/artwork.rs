// SPDX-License-Identifier: MPL-2.0
//! Tile artwork downloads with an LRU handle cache.
//!
//! Artwork is strictly decorative: a failed or oversized download marks the
//! URL as failed and the tile keeps its colored placeholder. Failures never
//! reach the feed error state.

use futures_util::StreamExt;
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Decoded artwork handles kept in memory at once.
const CACHE_CAPACITY: usize = 256;

/// Downloads larger than this are abandoned mid-stream.
const MAX_ARTWORK_BYTES: usize = 4 * 1024 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Cache of downloaded artwork plus bookkeeping for in-flight and failed
/// URLs, so every URL is requested at most once per session.
pub struct ArtworkCache {
    handles: LruCache<String, image::Handle>,
    pending: HashSet<String>,
    failed: HashSet<String>,
}

impl ArtworkCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handles: LruCache::new(
                NonZeroUsize::new(CACHE_CAPACITY).expect("capacity is non-zero"),
            ),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Cached handle for `url`. Reads come from the view, so this uses
    /// `peek` and leaves recency untouched; recency advances on insert.
    pub fn get(&self, url: &str) -> Option<image::Handle> {
        self.handles.peek(url).cloned()
    }

    /// Whether `url` needs a download. Marks it in-flight when it does, so
    /// repeated view refreshes do not spawn duplicate requests.
    pub fn begin_request(&mut self, url: &str) -> bool {
        if self.handles.contains(url) || self.pending.contains(url) || self.failed.contains(url) {
            return false;
        }
        self.pending.insert(url.to_string());
        true
    }

    /// Records the outcome of a download started via [`begin_request`].
    pub fn resolve(&mut self, url: &str, handle: Option<image::Handle>) {
        self.pending.remove(url);
        match handle {
            Some(handle) => {
                self.handles.put(url.to_string(), handle);
            }
            None => {
                self.failed.insert(url.to_string());
            }
        }
    }
}

impl Default for ArtworkCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Streams the artwork at `url`, giving up on network errors, non-success
/// statuses, or downloads exceeding [`MAX_ARTWORK_BYTES`].
pub async fn download(client: reqwest::Client, url: String) -> Option<image::Handle> {
    let response = client
        .get(&url)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .ok()?
        .error_for_status()
        .ok()?;

    let mut bytes: Vec<u8> = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.ok()?;
        if bytes.len() + chunk.len() > MAX_ARTWORK_BYTES {
            return None;
        }
        bytes.extend_from_slice(&chunk);
    }

    Some(image::Handle::from_bytes(bytes))
}
