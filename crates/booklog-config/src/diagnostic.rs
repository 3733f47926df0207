// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration error diagnostics rendered through miette.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A semantic validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(booklog::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// A deserialization or merge error surfaced by Figment.
    #[error("configuration error: {0}")]
    #[diagnostic(
        code(booklog::config::parse),
        help("check booklog.toml against the documented sections: app, api, storage, auth")
    )]
    Parse(String),
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may contain multiple underlying errors (one per offending
/// key); each becomes its own diagnostic.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| ConfigError::Parse(e.to_string()))
        .collect()
}

/// Render a list of config errors to stderr via miette's fancy reporter.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        let report = miette::Report::msg(format!("{error}"));
        eprintln!("{report:?}");
    }
    eprintln!(
        "booklog: {} configuration error{} found",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );
}
