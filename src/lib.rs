// SPDX-License-Identifier: MPL-2.0
//! `podgrid` is a podcast catalog browser built with the Iced GUI framework.
//!
//! It provides category browsing with carousel sections, a debounced
//! full-catalog search with sort/language/transcript filters, and a
//! responsive 3-column artwork grid, and demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/podgrid/0.2.0")]

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
