// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen artwork gallery built with the Iced GUI framework.
//!
//! It shows one artwork at a time from a fixed catalog, with Previous/Next
//! navigation that stops at both ends of the list. The gallery rules live in
//! [`domain`] and have no UI dependencies; [`app`] and [`ui`] wire them into
//! an Iced application with Fluent localization.

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

pub use error::{Error, Result};
