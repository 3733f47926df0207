// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared between the stores and the backend wire contract.
//!
//! `Book`, `Review`, and `ShelfEntry` are owned by the backend; the client
//! only ever holds server-assigned ids and never synthesizes its own. The
//! `New*` structs are the create payloads.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Reading status of a shelf entry.
///
/// Serialized kebab-case on the wire (`want-to-read`, `reading`,
/// `completed`), matching the backend's column values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ShelfStatus {
    WantToRead,
    Reading,
    Completed,
}

/// A catalog book as served by the backend.
///
/// `rating` and `review_count` are server-computed aggregates and read-only
/// to this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i64,
}

/// Payload for creating a book. The backend assigns the id; `rating` is
/// always submitted as 0 and recomputed server-side from reviews.
#[derive(Debug, Clone, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    pub genre: String,
    pub cover_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rating: f64,
}

/// A review attached to a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub reviewer_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}

/// Payload for submitting a review. `reviewer_name` must equal the acting
/// session's username at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub book_id: i64,
    pub reviewer_name: String,
    pub rating: u8,
    pub comment: String,
}

/// A shelf entry for the current user. `book_title` is a denormalized
/// snapshot taken by the backend at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfEntry {
    pub id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub status: ShelfStatus,
    #[serde(default)]
    pub user_notes: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating a shelf entry. A missing rating is sent as an
/// explicit null, matching the backend contract.
#[derive(Debug, Clone, Serialize)]
pub struct NewShelfEntry {
    pub book_id: i64,
    pub status: ShelfStatus,
    pub user_notes: String,
    pub rating: Option<u8>,
}

/// The public identity of a registered user. The password hash never leaves
/// the storage and session layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub email: String,
    pub registered_at: String,
}
