// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use art_space::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let card_shadow = Color {
    a: opacity::SHADOW,
    ..palette::BLACK
};

let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.95, 0.95, 0.96);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const SHADOW: f32 = 0.35;
    pub const MUTED: f32 = 0.6;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Artwork card
    pub const CARD_WIDTH: f32 = 280.0;
    pub const CARD_HEIGHT: f32 = 380.0;
    pub const CARD_PADDING: f32 = 30.0;

    // Navigation buttons
    pub const NAV_BUTTON_WIDTH: f32 = 135.0;
    pub const NAV_BUTTON_HEIGHT: f32 = 50.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Title: artwork title under the card
    //! - Body: button labels, caption
    //! - Caption: position indicator

    pub const TITLE_LG: f32 = 30.0;
    pub const BODY: f32 = 15.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: opacity::SHADOW,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    /// Elevated artwork card.
    pub const ELEVATED: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    // Both buttons plus the gap between them must fit under the card.
    assert!(sizing::NAV_BUTTON_WIDTH * 2.0 <= sizing::CARD_WIDTH);
    assert!(sizing::CARD_PADDING * 2.0 < sizing::CARD_WIDTH);

    assert!(typography::TITLE_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
