// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Booklog reading-tracker client.
//!
//! This crate provides the error taxonomy and the domain types used
//! throughout the Booklog workspace. Every store crate builds on these.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::BooklogError;
pub use types::{
    Book, Credential, NewBook, NewReview, NewShelfEntry, Review, ShelfEntry, ShelfStatus,
};
