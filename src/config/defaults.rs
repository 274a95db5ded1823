// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

/// Locale used when neither the CLI, the config file nor the OS yields a
/// supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Log filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "art_space=info,warn";

/// i18n key logged when `settings.toml` exists but cannot be loaded.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";
