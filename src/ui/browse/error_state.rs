// SPDX-License-Identifier: MPL-2.0
//! Centered fetch-failure placeholder. Static; a fresh fetch only starts
//! from a user action (new query, category change).

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{column, container, text};
use iced::{Alignment, Color, Element, Length};

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let muted = Color {
        a: opacity::TEXT_MUTED,
        ..palette::GRAY_900
    };

    container(
        column![
            icons::tinted(icons::sized(icons::warning(), sizing::ICON_XL), palette::ERROR_500),
            text(i18n.tr("results-error-title")).size(typography::TITLE_SM),
            text(i18n.tr("results-error-message"))
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
