// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the navigation
//! rules can be tested without a window or a renderer.
//!
//! # Modules
//!
//! - [`artwork`]: Artwork records ([`Artwork`](artwork::Artwork),
//!   [`ImageRef`](artwork::ImageRef), [`Title`](artwork::Title))
//! - [`caption`]: Artist/year caption formatting ([`Caption`](caption::Caption))
//! - [`gallery`]: Gallery state and navigation ([`Gallery`](gallery::Gallery),
//!   [`NavigationInfo`](gallery::NavigationInfo))

pub mod artwork;
pub mod caption;
pub mod gallery;

pub use artwork::{Artwork, ArtworkError, ImageRef, Title};
pub use caption::{Caption, Segment, Weight};
pub use gallery::{Gallery, GalleryError, NavigationInfo, Step};
