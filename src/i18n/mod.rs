// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation bundles embedded at compile time from `assets/i18n/*.ftl`
//! - Runtime language switching
//! - Fallback to the default locale when a message is missing

pub mod fluent;
