// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels (including the skeleton pulse range)
- **Spacing**: Spacing scale (8px grid); the results grid is locked to 16px
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Note that `spacing::GRID` also defines the results-grid geometry
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (violet scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.84, 0.78, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.62, 0.5, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.48, 0.36, 0.88);
    pub const PRIMARY_600: Color = Color::from_rgb(0.38, 0.27, 0.76);
    pub const PRIMARY_700: Color = Color::from_rgb(0.3, 0.2, 0.62);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    /// Neutral fill behind artwork placeholders and skeleton tiles.
    pub const TILE_FILL: Color = Color::from_rgb(0.55, 0.55, 0.58);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels (filter modal card)
    pub const SURFACE: f32 = 0.95;

    /// Secondary text on tiles and section headers.
    pub const TEXT_MUTED: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units

    /// Edge padding and inter-tile gap of the results grid. Changing this
    /// changes the tile geometry; see `ui::state::grid`.
    pub const GRID: f32 = MD;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Artwork tiles inside a horizontal carousel section.
    pub const CAROUSEL_TILE: f32 = 112.0;

    /// Height reserved for the title placeholder under a carousel tile.
    pub const CAROUSEL_TITLE_BAR: f32 = 12.0;

    /// Width of the filter modal card.
    pub const MODAL_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for a consistent text hierarchy.

    /// Large title - Detail screen podcast title
    pub const TITLE_LG: f32 = 26.0;

    /// Medium title - Modal heading, section headers
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Carousel section headings
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Tile titles, hints
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Tile authors, badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}
