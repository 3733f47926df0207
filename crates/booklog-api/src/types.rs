// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types specific to the backend REST contract.

use booklog_core::{Book, Review};
use serde::Deserialize;

/// One page of the paginated catalog listing.
///
/// The backend names the pagination field `total_pages` on filtered queries
/// and `pages` on the unfiltered first load; both deserialize here.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    pub books: Vec<Book>,
    #[serde(alias = "pages", default = "default_total_pages")]
    pub total_pages: i64,
}

fn default_total_pages() -> i64 {
    1
}

/// A single book with its embedded review collection, as served by
/// `GET /books/{id}`. The canonical source for per-book reviews.
#[derive(Debug, Clone, Deserialize)]
pub struct BookDetail {
    #[serde(flatten)]
    pub book: Book,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Error payload shape the backend uses for 400-class responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
