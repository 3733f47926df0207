// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Booklog configuration system.

use booklog_config::diagnostic::ConfigError;
use booklog_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_booklog_config() {
    let toml = r#"
[app]
log_level = "debug"

[api]
base_url = "http://localhost:9000/api"
timeout_secs = 5

[storage]
database_path = "/tmp/test-booklog.db"

[auth]
kdf_memory_cost = 32768
kdf_iterations = 3
kdf_parallelism = 2
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.api.base_url, "http://localhost:9000/api");
    assert_eq!(config.api.timeout_secs, 5);
    assert_eq!(config.storage.database_path, "/tmp/test-booklog.db");
    assert_eq!(config.auth.kdf_memory_cost, 32768);
    assert_eq!(config.auth.kdf_iterations, 3);
    assert_eq!(config.auth.kdf_parallelism, 2);
}

/// Missing sections fall back to compiled defaults.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.app.log_level, "info");
    assert_eq!(config.api.base_url, "http://localhost:5001/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert!(!config.storage.database_path.is_empty());
    assert_eq!(config.auth.kdf_iterations, 2);
}

/// Unknown keys are rejected by deny_unknown_fields.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[api]
base_uri = "http://localhost:5001/api"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("base_uri"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// A partial section keeps defaults for the unspecified keys.
#[test]
fn partial_section_keeps_other_defaults() {
    let toml = r#"
[api]
base_url = "https://books.example.com/api"
"#;

    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.api.base_url, "https://books.example.com/api");
    assert_eq!(config.api.timeout_secs, 30);
}

/// load_and_validate_str surfaces semantic validation errors.
#[test]
fn invalid_base_url_fails_validation() {
    let toml = r#"
[api]
base_url = "not a url"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("base_url"))
    ));
}

/// Validation collects all errors instead of failing fast.
#[test]
fn validation_collects_multiple_errors() {
    let toml = r#"
[api]
base_url = ""
timeout_secs = 0

[storage]
database_path = ""
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.len() >= 3, "expected at least 3 errors, got {}", errors.len());
}
