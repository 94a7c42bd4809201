// SPDX-License-Identifier: MPL-2.0
//! Flat 3-column grid of search results.
//!
//! Tiles are laid out row by row with the shared grid geometry, so widths
//! match the skeleton exactly. Each tile carries a bottom margin except in
//! the final row (see `ui::state::grid::bottom_margin`).

use crate::app::Message;
use crate::data::ArtworkCache;
use crate::domain::PodcastSummary;
use crate::ui::state::grid::{self, GridGeometry, COLUMNS, EDGE_PADDING, ITEM_GAP};
use iced::widget::{container, row, scrollable, Column, Row};
use iced::{Element, Length, Padding};

use super::tile;

pub fn view<'a>(
    items: &'a [PodcastSummary],
    artwork: &ArtworkCache,
    viewport_width: f32,
) -> Element<'a, Message> {
    let geometry = GridGeometry::for_width(viewport_width);
    let count = items.len();

    let mut grid = Column::new().width(Length::Fill);
    for (row_index, chunk) in items.chunks(COLUMNS).enumerate() {
        let mut cells: Row<'a, Message> = row![].spacing(ITEM_GAP);
        for (cell_index, summary) in chunk.iter().enumerate() {
            let index = row_index * COLUMNS + cell_index;
            let margin = grid::bottom_margin(index, count);
            cells = cells.push(
                container(tile::view(summary, artwork, geometry.tile_width())).padding(
                    Padding {
                        bottom: margin,
                        ..Padding::ZERO
                    },
                ),
            );
        }
        grid = grid.push(cells);
    }

    scrollable(
        container(grid)
            .width(Length::Fill)
            .padding(Padding::ZERO.left(EDGE_PADDING).right(EDGE_PADDING)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
