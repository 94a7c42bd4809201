// SPDX-License-Identifier: MPL-2.0
//! Search input row: query field, clear button, filter trigger.
//!
//! The clear button only exists while the field holds text, and the filter
//! trigger only exists while a committed query is active (filters apply to
//! search results, not to browsing). The trigger's icon tints whenever at
//! least one filter deviates from its default, so active filters stay
//! visible while the modal is closed.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::state::FilterState;
use crate::ui::{icons, styles};
use iced::widget::{button, container, row, text_input, Row};
use iced::{Alignment, Element, Length, Padding};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a str,
    pub search_active: bool,
    pub filters: &'a FilterState,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let field = text_input(&ctx.i18n.tr("search-placeholder"), ctx.query)
        .on_input(Message::QueryEdited)
        .padding(spacing::XS)
        .width(Length::Fill);

    let mut bar: Row<'_, Message> = row![
        icons::glyph(icons::search(), palette::GRAY_400),
        field,
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    if !ctx.query.is_empty() {
        bar = bar.push(
            button(icons::glyph(icons::x(), palette::GRAY_700))
                .padding(spacing::XXS)
                .style(styles::button::icon)
                .on_press(Message::QueryCleared),
        );
    }

    if ctx.search_active {
        let tint = if ctx.filters.active_filter_count() > 0 {
            palette::PRIMARY_500
        } else {
            palette::GRAY_700
        };
        bar = bar.push(
            button(icons::glyph(icons::sliders(), tint))
                .padding(spacing::XXS)
                .style(styles::button::icon)
                .on_press(Message::FilterModalOpened),
        );
    }

    container(bar)
        .width(Length::Fill)
        .padding(Padding::ZERO.left(spacing::MD).right(spacing::MD))
        .into()
}
