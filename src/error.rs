// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Domain errors stay dependency-free in [`crate::domain`]; this enum wraps
//! them together with the I/O, TOML and toolkit failures that only show up at
//! the edges (startup, config and catalog loading).

use crate::domain::{ArtworkError, GalleryError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Cannot read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog error in {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: ArtworkError,
    },

    #[error("Gallery error: {0}")]
    Gallery(#[from] GalleryError),

    #[error("UI error: {0}")]
    Ui(#[from] iced::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
