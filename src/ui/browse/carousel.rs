// SPDX-License-Identifier: MPL-2.0
//! Horizontally scrolling category section for the browsing feed.

use crate::app::Message;
use crate::data::{ArtworkCache, CategorySection};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{column, container, row, scrollable, text, Row};
use iced::{Element, Length, Padding};

use super::tile;

/// One section: a localized category heading over a scrollable row of
/// fixed-size tiles.
pub fn view<'a>(
    section: &'a CategorySection,
    artwork: &ArtworkCache,
    i18n: &I18n,
) -> Element<'a, Message> {
    let heading = text(i18n.tr(&section.category.i18n_key())).size(typography::TITLE_SM);

    let mut tiles: Row<'a, Message> = row![].spacing(spacing::MD);
    for summary in &section.items {
        tiles = tiles.push(tile::view(summary, artwork, sizing::CAROUSEL_TILE));
    }

    column![
        container(heading).padding(Padding::ZERO.left(spacing::MD)),
        scrollable(
            container(tiles).padding(Padding::ZERO.left(spacing::MD).right(spacing::MD))
        )
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill),
    ]
    .spacing(spacing::XS)
    .width(Length::Fill)
    .into()
}
