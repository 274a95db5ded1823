// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Elevated, square-cornered card framing the artwork image.
pub fn artwork_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::ELEVATED,
        ..Default::default()
    }
}

/// Panel behind the title and artist caption.
///
/// Derived from the active theme's background so the text stays readable in
/// both light and dark modes.
pub fn caption_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Placeholder shown in the card when the image file is not available.
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}
