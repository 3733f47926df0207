// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as a well-formed API base URL and Argon2 parameter
//! lower bounds.

use url::Url;

use crate::diagnostic::ConfigError;
use crate::model::BooklogConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &BooklogConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else {
        match Url::parse(base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ConfigError::Validation {
                message: format!(
                    "api.base_url must use http or https, got scheme `{}`",
                    url.scheme()
                ),
            }),
            Err(e) => errors.push(ConfigError::Validation {
                message: format!("api.base_url `{base_url}` is not a valid URL: {e}"),
            }),
        }
    }

    if config.api.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "api.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.auth.kdf_memory_cost < 8192 {
        errors.push(ConfigError::Validation {
            message: format!(
                "auth.kdf_memory_cost must be at least 8192 (8 MiB), got {}",
                config.auth.kdf_memory_cost
            ),
        });
    }

    if config.auth.kdf_iterations < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "auth.kdf_iterations must be at least 1, got {}",
                config.auth.kdf_iterations
            ),
        });
    }

    if config.auth.kdf_parallelism < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "auth.kdf_parallelism must be at least 1, got {}",
                config.auth.kdf_parallelism
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
