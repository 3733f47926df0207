// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Booklog client.
//!
//! Holds the two pieces of local persistent state: the credential registry
//! (one row per registered username) and the current-session pointer. Both
//! survive process restarts and are the sole source of truth the session
//! store reads at startup. Nothing here talks to the backend.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use database::Database;
pub use models::CredentialRecord;
