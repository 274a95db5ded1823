// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The UI follows the Elm-style "state down, messages up" pattern: the
//! application owns the state, screens render from it and emit messages.
//!
//! # Screens
//!
//! - [`gallery`] - Current artwork with Previous/Next navigation
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
