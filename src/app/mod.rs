// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the browsing screen.
//!
//! The `App` struct wires together the search orchestrator, filter state,
//! category selection, and the two podcast feeds, and translates messages
//! into side effects like config persistence or feed fetches. This module
//! intentionally keeps policy decisions (debounce length, startup category,
//! persistence format) close to the main update loop so it is easy to audit
//! user-facing behavior.

pub mod feed;
mod message;
mod subscription;
mod update;
mod view;

pub use message::Message;

use crate::config::{self, Config};
use crate::data::{ArtworkCache, Catalog, CategorySection};
use crate::domain::{Category, PodcastSummary};
use crate::i18n::fluent::I18n;
use crate::ui::state::{FilterState, SearchState};
use feed::Feed;
use iced::{Task, Theme};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Start-up options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// Replacement catalog TOML, instead of the embedded one.
    pub catalog_path: Option<String>,
}

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Browse,
    /// Per-podcast detail destination, addressed from any tile.
    Detail(PodcastSummary),
}

/// Root Iced application state that bridges the browsing screen,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    catalog: Arc<Catalog>,
    http: reqwest::Client,
    artwork: ArtworkCache,
    search: SearchState,
    filters: FilterState,
    filter_modal_open: bool,
    category: Category,
    /// Category-browse feed: carousel sections.
    browse: Feed<Vec<CategorySection>>,
    /// Search feed: the flat results list for the 3-column grid.
    results: Feed<Vec<PodcastSummary>>,
    /// Window width, the viewport for all grid geometry.
    viewport_width: f32,
    /// Animation clock, advanced by tick subscriptions.
    now: Instant,
}

impl App {
    pub const INITIAL_WIDTH: f32 = 420.0;
    pub const INITIAL_HEIGHT: f32 = 760.0;

    /// Builds the initial state and kicks off the first category fetch.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: failed to load settings: {}", e);
                Config::default()
            }
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog = load_catalog(&flags);
        let category = config
            .startup_category
            .as_deref()
            .and_then(Category::from_slug)
            .unwrap_or(Category::All);
        let filters = match &config.filter_languages {
            Some(codes) => FilterState::with_languages(
                codes
                    .iter()
                    .filter_map(|code| crate::domain::Language::from_code(code)),
            ),
            None => FilterState::default(),
        };

        let mut app = Self {
            i18n,
            config,
            screen: Screen::Browse,
            catalog: Arc::new(catalog),
            http: reqwest::Client::new(),
            artwork: ArtworkCache::new(),
            search: SearchState::default(),
            filters,
            filter_modal_open: false,
            category,
            browse: Feed::new(),
            results: Feed::new(),
            viewport_width: Self::INITIAL_WIDTH,
            now: Instant::now(),
        };
        let task = app.load_browse();
        (app, task)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Whether a skeleton is currently on screen (drives the pulse tick).
    fn skeleton_visible(&self) -> bool {
        if self.search.is_active() {
            self.results.is_loading()
        } else {
            self.browse.is_loading()
        }
    }
}

fn load_catalog(flags: &Flags) -> Catalog {
    let loaded = match &flags.catalog_path {
        Some(path) => Catalog::from_path(Path::new(path)),
        None => Catalog::embedded(),
    };
    match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Warning: failed to load catalog: {}", e);
            Catalog::default()
        }
    }
}
