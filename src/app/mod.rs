// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery screen, localization
//! and settings.
//!
//! Startup happens in two steps. [`prepare`] reads the configuration, loads the
//! catalog and builds the gallery; it fails before any window opens if the
//! catalog cannot be used. [`run`] then hands the prepared state to Iced, whose
//! update/view loop re-renders the whole screen after every message.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};
pub use subscription::key_to_message;

use crate::catalog::Catalog;
use crate::config;
use crate::domain::Gallery;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 700;

/// Everything resolved before the UI loop starts.
pub struct Startup {
    pub i18n: I18n,
    pub gallery: Gallery,
    pub theme_mode: ThemeMode,
}

impl fmt::Debug for Startup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Startup")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("artworks", &self.gallery.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Resolves configuration, locale and catalog into a ready-to-show gallery.
///
/// Catalog precedence: `--catalog` flag, then `[gallery] catalog` from
/// `settings.toml`, then the built-in artworks.
///
/// # Errors
///
/// Returns an error if the selected catalog cannot be read or parsed, or if
/// it contains no artworks.
pub fn prepare(flags: Flags) -> Result<Startup> {
    let (config, config_warning) = config::load_with_override(flags.config_dir);
    let i18n = I18n::new(flags.lang, &config);

    if let Some(key) = config_warning {
        tracing::warn!("{}", i18n.tr(&key));
    }

    let catalog_path = flags.catalog.or_else(|| config.gallery.catalog.clone());
    let catalog = match catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            Catalog::load_from_path(&path)?
        }
        None => Catalog::builtin()?,
    };

    let gallery = catalog.into_gallery()?;
    tracing::info!(artworks = gallery.len(), "gallery ready");

    Ok(Startup {
        i18n,
        gallery,
        theme_mode: config.general.theme_mode,
    })
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    gallery: Gallery,
    gallery_state: gallery::State,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.gallery.current_index())
            .field("artworks", &self.gallery.len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns [`Error::Ui`](crate::Error::Ui) if the window or renderer cannot
/// be created.
pub fn run(startup: Startup) -> Result<()> {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; the startup state is consumed once.
    let boot_state = RefCell::new(Some(startup));
    let boot = move || {
        let startup = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (App::new(startup), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    fn new(startup: Startup) -> Self {
        let gallery_state = gallery::State::new(&startup.gallery);
        Self {
            i18n: startup.i18n,
            gallery: startup.gallery,
            gallery_state,
            theme: startup.theme_mode.iced_theme(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.gallery.current().title())
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                gallery::update(gallery_message, &mut self.gallery);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        gallery::view(gallery::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            state: &self.gallery_state,
        })
        .map(Message::Gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GalleryError;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    fn english_builtin() -> App {
        let startup = Startup {
            i18n: I18n::new(Some("en-US".to_string()), &config::Config::default()),
            gallery: Catalog::builtin()
                .and_then(Catalog::into_gallery)
                .expect("builtin is non-empty"),
            theme_mode: ThemeMode::Dark,
        };
        App::new(startup)
    }

    #[test]
    fn next_and_previous_messages_move_the_cursor() {
        let mut app = english_builtin();
        let _ = app.update(Message::Gallery(gallery::Message::NextPressed));
        assert_eq!(app.gallery.current_index(), 1);
        let _ = app.update(Message::Gallery(gallery::Message::NextPressed));
        let _ = app.update(Message::Gallery(gallery::Message::NextPressed));
        assert_eq!(app.gallery.current_index(), 2);
        let _ = app.update(Message::Gallery(gallery::Message::PreviousPressed));
        assert_eq!(app.gallery.current_index(), 1);
    }

    #[test]
    fn title_follows_current_artwork() {
        let mut app = english_builtin();
        assert_eq!(app.title(), "River Blake - Art Space");
        let _ = app.update(Message::Gallery(gallery::Message::NextPressed));
        assert_eq!(app.title(), "Robo - Art Space");
    }

    #[test]
    fn theme_comes_from_startup_mode() {
        assert_eq!(english_builtin().theme(), Theme::Dark);
    }

    #[test]
    fn prepare_uses_builtin_catalog_by_default() {
        let dir = tempdir().expect("failed to create temp dir");
        let startup = prepare(Flags {
            lang: Some("fr".to_string()),
            catalog: None,
            config_dir: Some(dir.path().to_path_buf()),
        })
        .expect("builtin catalog should start");

        assert_eq!(startup.gallery.len(), 3);
        assert_eq!(startup.i18n.current_locale().to_string(), "fr");
        assert_eq!(startup.theme_mode, ThemeMode::System);
    }

    #[test]
    fn prepare_reads_catalog_and_theme_from_settings() {
        let dir = tempdir().expect("failed to create temp dir");
        let catalog_path = dir.path().join("catalog.toml");
        fs::write(
            &catalog_path,
            "[[artwork]]\nimage = \"solo.jpg\"\ntitle = \"Solo\"\nartist = \"Me\"\nyear = \"2024\"\n",
        )
        .expect("write catalog");
        fs::write(
            dir.path().join("settings.toml"),
            format!(
                "[general]\ntheme_mode = \"light\"\n\n[gallery]\ncatalog = {:?}\n",
                catalog_path.to_string_lossy()
            ),
        )
        .expect("write settings");

        let startup = prepare(Flags {
            lang: None,
            catalog: None,
            config_dir: Some(dir.path().to_path_buf()),
        })
        .expect("configured catalog should start");

        assert_eq!(startup.gallery.len(), 1);
        assert_eq!(startup.gallery.current().title(), "Solo");
        assert_eq!(startup.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn settings_catalog_path_is_relative_to_config_dir() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(
            dir.path().join("cat.toml"),
            "[[artwork]]\nimage = \"duo.jpg\"\ntitle = \"Duo\"\nartist = \"Us\"\nyear = \"2020\"\n",
        )
        .expect("write catalog");
        fs::write(
            dir.path().join("settings.toml"),
            "[gallery]\ncatalog = \"cat.toml\"\n",
        )
        .expect("write settings");

        let startup = prepare(Flags {
            lang: None,
            catalog: None,
            config_dir: Some(dir.path().to_path_buf()),
        })
        .expect("catalog next to settings should load");

        assert_eq!(startup.gallery.current().title(), "Duo");
        assert_eq!(
            startup.gallery.current().image().path(),
            dir.path().join("duo.jpg")
        );
    }

    #[test]
    fn prepare_rejects_empty_catalog() {
        let dir = tempdir().expect("failed to create temp dir");
        let catalog_path = dir.path().join("empty.toml");
        fs::write(&catalog_path, "# nothing here\n").expect("write catalog");

        let result = prepare(Flags {
            lang: None,
            catalog: Some(catalog_path),
            config_dir: Some(dir.path().to_path_buf()),
        });

        assert!(matches!(result, Err(Error::Gallery(GalleryError::Empty))));
    }

    #[test]
    fn prepare_reports_missing_catalog_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = prepare(Flags {
            lang: None,
            catalog: Some(dir.path().join("nope.toml")),
            config_dir: Some(dir.path().to_path_buf()),
        });

        match result {
            Err(Error::CatalogIo { path, .. }) => assert_eq!(path, dir.path().join("nope.toml")),
            other => panic!("expected catalog I/O error, got {other:?}"),
        }
    }
}
