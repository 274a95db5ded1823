// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use art_space::ui::design_tokens::{palette, sizing, spacing, typography};
    use art_space::ui::styles::{button, container};
    use art_space::ui::theming::ThemeMode;
    use iced::Theme;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [
                iced::widget::button::Status::Active,
                iced::widget::button::Status::Hovered,
                iced::widget::button::Status::Pressed,
                iced::widget::button::Status::Disabled,
            ] {
                let _ = button::navigation(&theme, status);
            }
            let _ = container::artwork_card(&theme);
            let _ = container::caption_panel(&theme);
            let _ = container::image_placeholder(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = typography::TITLE_LG;
        assert!(sizing::NAV_BUTTON_WIDTH < sizing::CARD_WIDTH);
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }
}
