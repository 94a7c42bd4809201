// SPDX-License-Identifier: MPL-2.0
//! The podcast-browsing screen.
//!
//! Composition is top-down: the search bar and category tabs sit above a
//! results area that renders exactly one of the two feeds. Browsing shows
//! one horizontal carousel per category section; searching shows a flat
//! 3-column grid. Both feeds share the Loading/Failed/Empty/Ready
//! classification and the skeleton placeholders mirror the layout of the
//! content they stand in for.

pub mod category_tabs;
pub mod carousel;
pub mod detail;
pub mod empty_state;
pub mod error_state;
pub mod filter_modal;
pub mod results_grid;
pub mod search_bar;
pub mod skeleton;
pub mod tile;
