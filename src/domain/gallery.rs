// SPDX-License-Identifier: MPL-2.0
//! Gallery state and navigation.
//!
//! A [`Gallery`] owns a fixed, non-empty list of artworks and a cursor into
//! it. The list never changes after construction; only [`Gallery::go_previous`]
//! and [`Gallery::go_next`] move the cursor, and both stop at the ends of the
//! list instead of wrapping.

use super::artwork::Artwork;
use std::fmt;

/// Navigation state snapshot for UI rendering.
///
/// Carries everything the view needs to draw the navigation row without
/// touching the gallery itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether "Previous" can be activated.
    pub has_previous: bool,
    /// Whether "Next" can be activated.
    pub has_next: bool,
    /// Current position in the list (0-indexed).
    pub current_index: usize,
    /// Number of artworks in the gallery.
    pub total_count: usize,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved.
    Moved { from: usize, to: usize },
    /// The cursor was already at the end in the requested direction.
    AtBoundary,
}

impl Step {
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Step::Moved { .. })
    }
}

/// Ordered artwork list with a cursor.
///
/// Invariant: `current_index < artworks.len()`, and `artworks` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    artworks: Vec<Artwork>,
    current_index: usize,
}

impl Gallery {
    /// Creates a gallery positioned on the first artwork.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] if `artworks` yields nothing, since no
    /// valid cursor exists for an empty list.
    pub fn new(artworks: impl IntoIterator<Item = Artwork>) -> Result<Self, GalleryError> {
        let artworks: Vec<Artwork> = artworks.into_iter().collect();
        if artworks.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self {
            artworks,
            current_index: 0,
        })
    }

    /// Returns the artwork under the cursor.
    #[must_use]
    pub fn current(&self) -> &Artwork {
        &self.artworks[self.current_index]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    /// Returns `true` if the gallery holds no artworks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index < self.artworks.len() - 1
    }

    /// Moves the cursor one step back. No-op on the first artwork.
    pub fn go_previous(&mut self) -> Step {
        if !self.has_previous() {
            return Step::AtBoundary;
        }
        let from = self.current_index;
        self.current_index -= 1;
        Step::Moved {
            from,
            to: self.current_index,
        }
    }

    /// Moves the cursor one step forward. No-op on the last artwork.
    pub fn go_next(&mut self) -> Step {
        if !self.has_next() {
            return Step::AtBoundary;
        }
        let from = self.current_index;
        self.current_index += 1;
        Step::Moved {
            from,
            to: self.current_index,
        }
    }

    /// Returns a navigation snapshot for rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            current_index: self.current_index,
            total_count: self.artworks.len(),
        }
    }
}

/// Errors raised while building a [`Gallery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// The artwork list was empty.
    Empty,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Empty => write!(f, "gallery needs at least one artwork"),
        }
    }
}

impl std::error::Error for GalleryError {}
