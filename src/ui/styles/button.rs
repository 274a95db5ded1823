// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the Previous/Next buttons.
///
/// Light surface with dark label in both themes; a button without a press
/// handler renders in the muted disabled variant.
pub fn navigation(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    let surface = if is_light { palette::GRAY_50 } else { palette::GRAY_100 };

    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(surface)),
            text_color: BLACK,
            border: Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_100)),
            text_color: BLACK,
            border: Border {
                color: palette::PRIMARY_400,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_200)),
            text_color: BLACK,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Style for a disabled button (grayed out, non-interactive).
pub fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::MUTED,
            ..palette::GRAY_200
        })),
        text_color: Color {
            a: opacity::MUTED,
            ..palette::GRAY_700
        },
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
