// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Booklog reading-tracker client.

use thiserror::Error;

/// The primary error type used across all Booklog stores and operations.
///
/// The first five variants form the user-facing taxonomy: callers decide the
/// visible message per variant (a shelf `Conflict` reads differently from a
/// generic `Network` failure). The remaining variants cover infrastructure.
#[derive(Debug, Error)]
pub enum BooklogError {
    /// Malformed or missing required input, caught before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrong password for a known username.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The requested entity does not exist (unknown username at login,
    /// missing book or entry on the backend).
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation collides with existing state (duplicate username at
    /// registration, duplicate shelf entry for a book).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Request failed in transit or the backend returned an unexpected
    /// error status not otherwise classified.
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Local persistence errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors (broken programming invariants).
    #[error("internal error: {0}")]
    Internal(String),
}

impl BooklogError {
    /// Shorthand for a `Network` error without an underlying source.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }
}
