// SPDX-License-Identifier: MPL-2.0
//! Skeleton placeholders shown while a feed is loading.
//!
//! Both layouts mirror the content they stand in for: the search skeleton
//! is a 12-tile grid with the live grid's geometry, the browse skeleton is
//! a heading bar over a 4-tile carousel row. All tiles share one pulse
//! opacity, sampled once per frame from the feed's [`SkeletonPulse`].

use crate::app::Message;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::grid::{GridGeometry, COLUMNS, EDGE_PADDING, ITEM_GAP};
use crate::ui::styles;
use iced::widget::{column, container, row, Column, Row, Space};
use iced::{Element, Length, Padding};

/// Placeholder tile count in the search-results grid skeleton.
pub const GRID_TILES: usize = 12;

/// Placeholder tile count in one carousel-row skeleton.
pub const ROW_TILES: usize = 4;

/// 12-tile stand-in for the search results grid.
pub fn results_grid<'a>(viewport_width: f32, opacity: f32) -> Element<'a, Message> {
    let sides = grid_tile_sides(viewport_width);

    let mut grid = Column::new().spacing(ITEM_GAP).width(Length::Fill);
    for chunk in sides.chunks(COLUMNS) {
        let mut cells: Row<'a, Message> = row![].spacing(ITEM_GAP);
        for side in chunk {
            cells = cells.push(tile(*side, *side, opacity));
        }
        grid = grid.push(cells);
    }

    container(grid)
        .width(Length::Fill)
        .padding(Padding::ZERO.left(EDGE_PADDING).right(EDGE_PADDING))
        .into()
}

/// Heading bar plus 4 square tiles, standing in for one carousel section.
pub fn carousel_row<'a>(opacity: f32) -> Element<'a, Message> {
    let heading = tile(sizing::CAROUSEL_TILE, sizing::CAROUSEL_TITLE_BAR, opacity);

    let mut tiles: Row<'a, Message> = row![].spacing(spacing::MD);
    for cell in carousel_tiles(opacity) {
        tiles = tiles.push(cell);
    }

    column![heading, tiles]
        .spacing(spacing::XS)
        .padding(Padding::ZERO.left(spacing::MD))
        .width(Length::Fill)
        .into()
}

/// Side lengths of every tile in the grid skeleton, one entry per tile.
/// The grid loop renders exactly this list, so tests can pin the emitted
/// tile count and sizing without rendering.
fn grid_tile_sides(viewport_width: f32) -> Vec<f32> {
    let side = GridGeometry::for_width(viewport_width).tile_width();
    vec![side; GRID_TILES]
}

/// The artwork-plus-title-bar columns of one carousel-row skeleton.
fn carousel_tiles<'a>(opacity: f32) -> Vec<Element<'a, Message>> {
    (0..ROW_TILES)
        .map(|_| {
            column![
                tile(sizing::CAROUSEL_TILE, sizing::CAROUSEL_TILE, opacity),
                Space::with_height(spacing::XXS),
                tile(sizing::CAROUSEL_TILE, sizing::CAROUSEL_TITLE_BAR, opacity),
            ]
            .into()
        })
        .collect()
}

fn tile<'a>(width: f32, height: f32, opacity: f32) -> Element<'a, Message> {
    container(Space::new(Length::Fixed(width), Length::Fixed(height)))
        .style(styles::container::skeleton(opacity))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn grid_skeleton_emits_twelve_tiles_at_any_width() {
        for width in [320.0_f32, 414.0, 768.0] {
            let sides = grid_tile_sides(width);
            assert_eq!(sides.len(), GRID_TILES, "width {width}");

            // Every tile matches the live grid's geometry for that width.
            let expected = GridGeometry::for_width(width).tile_width();
            for side in sides {
                assert_abs_diff_eq!(side, expected, epsilon = F32_EPSILON);
            }
        }
    }

    #[test]
    fn grid_skeleton_fills_whole_rows() {
        assert_eq!(GRID_TILES % COLUMNS, 0);
    }

    #[test]
    fn carousel_skeleton_emits_four_tiles() {
        assert_eq!(carousel_tiles(0.3).len(), ROW_TILES);
        assert_eq!(ROW_TILES, 4);
    }
}
