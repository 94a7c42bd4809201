// SPDX-License-Identifier: MPL-2.0
//! Centered empty-feed placeholder.
//!
//! The copy differs between "nothing matched your search" and "this
//! category has no podcasts"; the layout is the same.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{column, container, text};
use iced::{Alignment, Color, Element, Length};

/// Which feed ran dry; selects the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Search,
    Browse,
}

pub fn view<'a>(kind: Kind, i18n: &I18n) -> Element<'a, Message> {
    let (title_key, message_key) = match kind {
        Kind::Search => ("results-empty-title", "results-empty-message"),
        Kind::Browse => ("browse-empty-title", "browse-empty-message"),
    };

    let muted = Color {
        a: opacity::TEXT_MUTED,
        ..palette::GRAY_900
    };

    container(
        column![
            icons::tinted(icons::sized(icons::inbox(), sizing::ICON_XL), muted),
            text(i18n.tr(title_key)).size(typography::TITLE_SM),
            text(i18n.tr(message_key))
                .size(typography::BODY)
                .color(muted),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
