// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (filter modal "Apply").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border::default(),
            shadow: shadow::NONE,
        },
    }
}

/// Category tab. `selected` switches between the pill highlight and the
/// quiet resting look.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let (background, text_color) = if selected {
            (palette::PRIMARY_500, palette::WHITE)
        } else {
            match status {
                button::Status::Hovered => {
                    (extended.background.weak.color, extended.background.base.text)
                }
                _ => (Color::TRANSPARENT, extended.background.base.text)
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
        }
    }
}

/// Borderless icon button (clear search, open filters, back).
pub fn icon(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.1,
            ..palette::GRAY_700
        },
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_700,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
    }
}

/// Invisible button wrapping an artwork tile; the artwork itself is the
/// affordance.
pub fn tile(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
    }
}
