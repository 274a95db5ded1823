// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the current artwork card, its caption, and the
//! Previous/Next navigation row.
//!
//! The screen is rebuilt from [`Gallery`] state on every render. Buttons are
//! only given a press handler when the gallery can move in that direction,
//! and [`update`] still goes through the gallery's own boundary guard.

use crate::domain::{Caption, Gallery, NavigationInfo, Step, Weight};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font;
use iced::widget::image::{Handle, Image};
use iced::widget::text::Span;
use iced::widget::{button, rich_text, span, Column, Container, Row, Text};
use iced::{ContentFit, Element, Font, Length};

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PreviousPressed,
    NextPressed,
}

/// Image handles prepared once per artwork at startup.
///
/// `None` marks an artwork whose image file could not be found; the card then
/// shows a placeholder instead of an empty frame.
#[derive(Debug, Clone, Default)]
pub struct State {
    images: Vec<Option<Handle>>,
}

impl State {
    #[must_use]
    pub fn new(gallery: &Gallery) -> Self {
        let images = gallery
            .artworks()
            .iter()
            .map(|artwork| {
                let path = artwork.image().path();
                if path.is_file() {
                    Some(Handle::from_path(path))
                } else {
                    tracing::warn!(
                        title = artwork.title(),
                        path = %path.display(),
                        "artwork image not found"
                    );
                    None
                }
            })
            .collect();
        Self { images }
    }

    fn image(&self, index: usize) -> Option<&Handle> {
        self.images.get(index).and_then(Option::as_ref)
    }
}

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub state: &'a State,
}

/// Applies a navigation message to the gallery.
pub fn update(message: Message, gallery: &mut Gallery) -> Step {
    let step = match message {
        Message::PreviousPressed => gallery.go_previous(),
        Message::NextPressed => gallery.go_next(),
    };
    match step {
        Step::Moved { from, to } => tracing::debug!(from, to, ?message, "gallery moved"),
        Step::AtBoundary => tracing::debug!(?message, "gallery already at boundary"),
    }
    step
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let artwork = ctx.gallery.current();
    let navigation = ctx.gallery.navigation_info();

    let card = build_card(ctx.state.image(navigation.current_index), ctx.i18n);

    let title = Text::new(artwork.title()).size(typography::TITLE_LG);
    let caption = caption_text(&Caption::artist_and_year(artwork.artist(), artwork.year()));

    let caption_panel = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(title)
            .push(caption),
    )
    .padding(spacing::MD)
    .center_x(Length::Fixed(sizing::CARD_WIDTH))
    .style(styles::container::caption_panel);

    let position = Text::new(position_label(ctx.i18n, navigation)).size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::LG])
        .align_x(Horizontal::Center)
        .push(card)
        .push(caption_panel)
        .push(position)
        .push(build_navigation_row(ctx.i18n, navigation));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .align_y(Vertical::Center)
        .into()
}

fn build_card<'a>(image: Option<&Handle>, i18n: &I18n) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match image {
        Some(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(Text::new(i18n.tr("artwork-image-missing")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::image_placeholder)
            .into(),
    };

    Container::new(inner)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(sizing::CARD_PADDING)
        .style(styles::container::artwork_card)
        .into()
}

fn build_navigation_row<'a>(i18n: &I18n, navigation: NavigationInfo) -> Element<'a, Message> {
    let previous = nav_button(
        i18n.tr("nav-previous"),
        navigation.has_previous.then_some(Message::PreviousPressed),
    );
    let next = nav_button(
        i18n.tr("nav-next"),
        navigation.has_next.then_some(Message::NextPressed),
    );

    Row::new()
        .width(Length::Fixed(sizing::CARD_WIDTH + spacing::XL * 2.0))
        .align_y(Vertical::Bottom)
        .push(Container::new(previous).width(Length::Fill).align_x(Horizontal::Left))
        .push(Container::new(next).width(Length::Fill).align_x(Horizontal::Right))
        .into()
}

fn nav_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    let label = Container::new(Text::new(label).size(typography::BODY))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    button(label)
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::NAV_BUTTON_HEIGHT))
        .style(styles::button::navigation)
        .on_press_maybe(on_press)
        .into()
}

/// Renders a caption as rich text, one span per segment.
fn caption_text<'a>(caption: &Caption) -> Element<'a, Message> {
    let spans: Vec<Span<'a, (), Font>> = caption
        .segments()
        .iter()
        .map(|segment| span(segment.text.clone()).font(font_for(segment.weight)))
        .collect();

    rich_text(spans).size(typography::BODY).into()
}

fn font_for(weight: Weight) -> Font {
    match weight {
        Weight::Normal => Font::DEFAULT,
        Weight::Bold => Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        },
    }
}

/// One-based "current / total" indicator.
fn position_label(i18n: &I18n, navigation: NavigationInfo) -> String {
    let current = (navigation.current_index + 1).to_string();
    let total = navigation.total_count.to_string();
    i18n.tr_with_args("gallery-position", &[("current", &current), ("total", &total)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::domain::{Artwork, ImageRef};

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn update_moves_through_builtin_catalog() {
        let mut gallery = Catalog::builtin()
            .and_then(Catalog::into_gallery)
            .expect("builtin is non-empty");

        assert_eq!(
            update(Message::NextPressed, &mut gallery),
            Step::Moved { from: 0, to: 1 }
        );
        assert_eq!(gallery.current().title(), "Robo");
        assert_eq!(
            update(Message::PreviousPressed, &mut gallery),
            Step::Moved { from: 1, to: 0 }
        );
        assert_eq!(update(Message::PreviousPressed, &mut gallery), Step::AtBoundary);
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn bold_weight_maps_to_bold_font() {
        assert_eq!(font_for(Weight::Normal), Font::DEFAULT);
        assert_eq!(font_for(Weight::Bold).weight, font::Weight::Bold);
    }

    #[test]
    fn position_label_is_one_based() {
        let i18n = english();
        let navigation = NavigationInfo {
            has_previous: true,
            has_next: false,
            current_index: 2,
            total_count: 3,
        };
        assert_eq!(position_label(&i18n, navigation), "3 / 3");
    }

    #[test]
    fn missing_images_have_no_handle() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let present = dir.path().join("present.jpg");
        std::fs::write(&present, b"not really a jpeg").expect("write file");

        let gallery = Gallery::new([
            Artwork::new(ImageRef::new(present), "Present", "A", "1").expect("valid"),
            Artwork::new(ImageRef::new(dir.path().join("absent.jpg")), "Absent", "B", "2")
                .expect("valid"),
        ])
        .expect("non-empty");

        let state = State::new(&gallery);
        assert!(state.image(0).is_some());
        assert!(state.image(1).is_none());
        assert!(state.image(7).is_none());
    }
}
