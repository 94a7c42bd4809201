// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached using `OnceLock`. All sources use `currentColor` strokes, so a
//! single SVG renders in any color via [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `sliders` not `open_filters`).

use crate::ui::design_tokens::sizing;
use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(sliders, "sliders.svg", "Three horizontal slider tracks.");
define_icon!(x, "x.svg", "Diagonal cross.");
define_icon!(warning, "alert-triangle.svg", "Triangle with exclamation mark.");
define_icon!(inbox, "inbox.svg", "Empty inbox tray.");
define_icon!(arrow_left, "arrow-left.svg", "Leftward arrow.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Applies a fixed color to an icon's `currentColor` strokes.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| iced::widget::svg::Style { color: Some(color) })
}

/// Convenience for the most common case: a medium icon in a given color.
pub fn glyph(icon: Svg<'static>, color: Color) -> Svg<'static> {
    tinted(sized(icon, sizing::ICON_MD), color)
}
