// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./booklog.toml` > `~/.config/booklog/booklog.toml`
//! > `/etc/booklog/booklog.toml` with environment variable overrides via the
//! `BOOKLOG_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::BooklogConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/booklog/booklog.toml` (system-wide)
/// 3. `~/.config/booklog/booklog.toml` (user XDG config)
/// 4. `./booklog.toml` (local directory)
/// 5. `BOOKLOG_*` environment variables
pub fn load_config() -> Result<BooklogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BooklogConfig::default()))
        .merge(Toml::file("/etc/booklog/booklog.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("booklog/booklog.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("booklog.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<BooklogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BooklogConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BooklogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BooklogConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `BOOKLOG_API_BASE_URL` must map to
/// `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("BOOKLOG_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: BOOKLOG_API_BASE_URL -> "api_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("api_", "api.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("auth_", "auth.", 1);
        mapped.into()
    })
}
