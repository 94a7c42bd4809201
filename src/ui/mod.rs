// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`browse`] - The podcast-browsing screen: search bar, category tabs,
//!   carousel sections, results grid, skeletons, filter modal, detail view
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (search debounce, filters, grid
//!   geometry, skeleton pulse)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering

pub mod browse;
pub mod design_tokens;
pub mod icons;
pub mod state;
pub mod styles;
