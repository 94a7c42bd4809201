// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function plus the fetch helpers
//! that wrap the synchronous data-source ports in Iced tasks. Both fetch
//! helpers apply the catalog's simulated latency so loading skeletons stay
//! observable, and both tag their completion with the feed generation taken
//! at dispatch time.

use super::{App, Message, Screen};
use crate::config;
use crate::data::catalog::FETCH_LATENCY;
use crate::data::{artwork, CategorySection, CategorySource, SearchFilters, SearchSource};
use crate::domain::PodcastSummary;
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryEdited(text) => {
                self.search.edit(text, Instant::now());
                Task::none()
            }
            Message::QueryCleared => {
                // Fast path: no debounce, straight back to browsing.
                self.search.clear();
                self.results.reset();
                Task::none()
            }
            Message::DebounceTick(now) => {
                self.now = now;
                if !self.search.poll(now) {
                    return Task::none();
                }
                if self.search.is_active() {
                    self.load_search()
                } else {
                    // Committed below the threshold: the category feed owns
                    // the screen again; drop whatever the search feed held.
                    self.results.reset();
                    Task::none()
                }
            }
            Message::PulseTick(now) => {
                self.now = now;
                Task::none()
            }
            Message::CategorySelected(category) => {
                if category == self.category {
                    return Task::none();
                }
                self.category = category;
                self.config.startup_category = Some(category.slug().to_string());
                self.persist_config();
                self.load_browse()
            }
            Message::BrowseLoaded { generation, result } => {
                let urls = section_artwork_urls(&result);
                if self.browse.resolve(generation, result) {
                    self.request_artwork(urls)
                } else {
                    Task::none()
                }
            }
            Message::SearchLoaded { generation, result } => {
                let urls = result
                    .as_deref()
                    .map(summary_artwork_urls)
                    .unwrap_or_default();
                if self.results.resolve(generation, result) {
                    self.request_artwork(urls)
                } else {
                    Task::none()
                }
            }
            Message::FilterModalOpened => {
                self.filter_modal_open = true;
                Task::none()
            }
            Message::FilterModalClosed => {
                self.filter_modal_open = false;
                Task::none()
            }
            Message::SortSelected(sort_by) => {
                self.filters.set_sort_by(sort_by);
                self.refresh_search_results()
            }
            Message::LanguageToggled(language) => {
                self.filters.toggle_language(language);
                self.config.filter_languages = Some(
                    self.filters
                        .languages()
                        .iter()
                        .map(|l| l.code().to_string())
                        .collect(),
                );
                self.persist_config();
                self.refresh_search_results()
            }
            Message::TranscriptToggled => {
                self.filters.toggle_has_transcript();
                self.refresh_search_results()
            }
            Message::PodcastOpened(summary) => {
                self.screen = Screen::Detail(summary);
                Task::none()
            }
            Message::DetailClosed => {
                self.screen = Screen::Browse;
                Task::none()
            }
            Message::ArtworkLoaded { url, handle } => {
                self.artwork.resolve(&url, handle);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.viewport_width = size.width;
                Task::none()
            }
        }
    }

    /// Dispatches a category fetch for the current tab.
    pub(super) fn load_browse(&mut self) -> Task<Message> {
        let generation = self.browse.begin(Instant::now());
        let catalog = Arc::clone(&self.catalog);
        let category = self.category.as_filter();
        Task::perform(
            async move {
                tokio::time::sleep(FETCH_LATENCY).await;
                catalog.fetch(category)
            },
            move |result| Message::BrowseLoaded { generation, result },
        )
    }

    /// Dispatches a search fetch for the committed query and live filters.
    fn load_search(&mut self) -> Task<Message> {
        let generation = self.results.begin(Instant::now());
        let catalog = Arc::clone(&self.catalog);
        let query = self.search.debounced().to_string();
        let filters = self.search_filters();
        Task::perform(
            async move {
                tokio::time::sleep(FETCH_LATENCY).await;
                catalog.search(&query, &filters)
            },
            move |result| Message::SearchLoaded { generation, result },
        )
    }

    /// Filters take effect live: a change while search mode is active
    /// re-runs the search immediately. Outside search mode there is nothing
    /// to refresh.
    fn refresh_search_results(&mut self) -> Task<Message> {
        if self.search.is_active() {
            self.load_search()
        } else {
            Task::none()
        }
    }

    fn search_filters(&self) -> SearchFilters {
        SearchFilters {
            sort_by: self.filters.sort_by(),
            languages: self.filters.languages().clone(),
            has_transcript: self.filters.has_transcript(),
        }
    }

    /// Downloads artwork for any of `urls` not yet cached, failed, or in
    /// flight.
    fn request_artwork(&mut self, urls: Vec<String>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.artwork.begin_request(url))
            .map(|url| {
                let client = self.http.clone();
                let request_url = url.clone();
                Task::perform(artwork::download(client, request_url), move |handle| {
                    Message::ArtworkLoaded {
                        url: url.clone(),
                        handle,
                    }
                })
            })
            .collect();
        Task::batch(tasks)
    }

    fn persist_config(&self) {
        if let Err(e) = config::save(&self.config) {
            eprintln!("Warning: failed to save settings: {}", e);
        }
    }
}

fn section_artwork_urls<E>(result: &Result<Vec<CategorySection>, E>) -> Vec<String> {
    match result {
        Ok(sections) => sections
            .iter()
            .flat_map(|section| summary_artwork_urls(&section.items))
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn summary_artwork_urls(items: &[PodcastSummary]) -> Vec<String> {
    items.iter().map(|item| item.image_url.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::feed::Phase;
    use crate::data::{Catalog, FetchError};
    use crate::domain::{Category, Language, SortBy};
    use crate::ui::state::SearchMode;
    use std::time::Duration;

    fn catalog() -> Catalog {
        Catalog::from_toml(
            r#"
            [[podcasts]]
            id = "p1"
            title = "Night Frequencies"
            author = "Vale Audio"
            image = "https://example.org/p1.jpg"
            category = "science"
            languages = ["en"]
            popularity = 80
            transcript = true

            [[podcasts]]
            id = "p2"
            title = "Day Frequencies"
            author = "Vale Audio"
            image = "https://example.org/p2.jpg"
            category = "science"
            languages = ["es"]
            popularity = 95
            "#,
        )
        .expect("fixture catalog should parse")
    }

    /// Drives the debounce to completion the way the tick subscription
    /// would, without sleeping.
    fn type_and_commit(app: &mut App, text: &str) {
        let _ = app.update(Message::QueryEdited(text.to_string()));
        let deadline = Instant::now() + Duration::from_millis(600);
        let _ = app.update(Message::DebounceTick(deadline));
    }

    #[test]
    fn typing_alone_does_not_enter_search_mode() {
        let mut app = App::fixture(catalog());
        let _ = app.update(Message::QueryEdited("freq".to_string()));
        assert_eq!(app.search_state().mode(), SearchMode::Debouncing);
        assert!(matches!(app.results_feed().phase(), Phase::Idle));
    }

    #[test]
    fn committed_query_starts_a_search_fetch() {
        let mut app = App::fixture(catalog());
        type_and_commit(&mut app, "freq");
        assert_eq!(app.search_state().mode(), SearchMode::Searching);
        assert!(app.results_feed().is_loading());
    }

    #[test]
    fn short_committed_query_stays_browsing() {
        let mut app = App::fixture(catalog());
        type_and_commit(&mut app, "fr");
        assert_eq!(app.search_state().mode(), SearchMode::Browsing);
        assert!(matches!(app.results_feed().phase(), Phase::Idle));
    }

    #[test]
    fn clear_discards_in_flight_search_results() {
        let mut app = App::fixture(catalog());
        type_and_commit(&mut app, "freq");
        let _ = app.update(Message::QueryCleared);
        assert_eq!(app.search_state().mode(), SearchMode::Browsing);

        // The fetch dispatched before the clear resolves late; it must not
        // take over the screen.
        let _ = app.update(Message::SearchLoaded {
            generation: 1,
            result: Ok(vec![]),
        });
        assert!(matches!(app.results_feed().phase(), Phase::Idle));
    }

    #[test]
    fn browse_failure_renders_failed_phase() {
        let mut app = App::fixture(catalog());
        let task = app.load_browse();
        drop(task);
        let _ = app.update(Message::BrowseLoaded {
            generation: 1,
            result: Err(FetchError::new("offline")),
        });
        assert!(matches!(app.browse_feed().phase(), Phase::Failed));
    }

    #[test]
    fn category_change_reloads_the_browse_feed() {
        let mut app = App::fixture(catalog());
        let _ = app.update(Message::CategorySelected(Category::Science));
        assert!(app.browse_feed().is_loading());

        // Re-selecting the same tab is a no-op.
        let _ = app.update(Message::CategorySelected(Category::Science));
        assert!(app.browse_feed().is_loading());
    }

    #[test]
    fn filter_changes_rerun_an_active_search() {
        let mut app = App::fixture(catalog());
        type_and_commit(&mut app, "freq");
        let _ = app.update(Message::SearchLoaded {
            generation: 1,
            result: Ok(vec![]),
        });
        assert!(matches!(app.results_feed().phase(), Phase::Ready(_)));

        let _ = app.update(Message::SortSelected(SortBy::Popularity));
        assert!(app.results_feed().is_loading());
    }

    #[test]
    fn filter_changes_outside_search_mode_do_not_fetch() {
        let mut app = App::fixture(catalog());
        let _ = app.update(Message::LanguageToggled(Language::Spanish));
        assert!(matches!(app.results_feed().phase(), Phase::Idle));
        assert_eq!(app.filter_state().languages().len(), 2);
    }

    #[test]
    fn opening_a_podcast_switches_to_the_detail_screen() {
        let mut app = App::fixture(catalog());
        let summary = PodcastSummary {
            id: crate::domain::PodcastId::new("p1"),
            title: "Night Frequencies".to_string(),
            author: "Vale Audio".to_string(),
            image_url: "https://example.org/p1.jpg".to_string(),
        };
        let _ = app.update(Message::PodcastOpened(summary.clone()));
        assert_eq!(app.current_screen(), &Screen::Detail(summary));

        let _ = app.update(Message::DetailClosed);
        assert_eq!(app.current_screen(), &Screen::Browse);
    }
}
