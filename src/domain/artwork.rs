// SPDX-License-Identifier: MPL-2.0
//! Artwork value objects.
//!
//! An [`Artwork`] is one displayable record: an image reference plus the
//! title, artist and year strings shown under it. Records are immutable once
//! built; the only validated field is the title, which must not be blank.

use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// ImageRef
// =============================================================================

/// Opaque handle to an image resource.
///
/// The gallery never opens or decodes the file; it only hands the path to the
/// view layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    /// Creates a reference to the image at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the referenced path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Resolves a relative reference against `base`. Absolute references are
    /// returned unchanged.
    #[must_use]
    pub fn resolved_against(&self, base: &Path) -> Self {
        if self.0.is_absolute() {
            self.clone()
        } else {
            Self(base.join(&self.0))
        }
    }
}

// =============================================================================
// Title
// =============================================================================

/// Artwork title, guaranteed to contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Validates and wraps a title string.
    ///
    /// # Errors
    ///
    /// Returns [`ArtworkError::EmptyTitle`] if `value` is empty or only
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ArtworkError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ArtworkError::EmptyTitle);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Artwork
// =============================================================================

/// One record of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    image: ImageRef,
    title: Title,
    artist: String,
    year: String,
}

impl Artwork {
    /// Builds an artwork record.
    ///
    /// `year` is kept as a display string and never parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ArtworkError::EmptyTitle`] if `title` is blank.
    pub fn new(
        image: ImageRef,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: impl Into<String>,
    ) -> Result<Self, ArtworkError> {
        Ok(Self {
            image,
            title: Title::new(title)?,
            artist: artist.into(),
            year: year.into(),
        })
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns a copy of this record whose image reference is resolved
    /// against `base`.
    #[must_use]
    pub fn with_image_base(self, base: &Path) -> Self {
        Self {
            image: self.image.resolved_against(base),
            ..self
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while building an [`Artwork`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkError {
    /// The title was empty or contained only whitespace.
    EmptyTitle,
}

impl fmt::Display for ArtworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtworkError::EmptyTitle => write!(f, "artwork title must not be empty"),
        }
    }
}

impl std::error::Error for ArtworkError {}
