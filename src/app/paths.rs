// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - the `--config-dir` CLI argument, or a
//!    temporary directory in tests
//! 2. **Platform default** - via `dirs` crate
//!
//! The application only ever reads from these directories.

use std::path::PathBuf;

/// Application name used for directory naming.
pub const APP_NAME: &str = "ArtSpace";

/// Returns the application config directory path, or `override_path` when
/// one is given.
///
/// Platform defaults:
/// - Linux: `~/.config/ArtSpace/`
/// - macOS: `~/Library/Application Support/ArtSpace/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ArtSpace\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
