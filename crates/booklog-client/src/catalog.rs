// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog view: the paginated, filterable, searchable projection of the
//! book catalog.
//!
//! Every fetch replaces `books` and `total_pages` wholesale; there is no
//! incremental merge. Changing the search term or genre resets to page 1;
//! plain pagination keeps the current filters. A failed fetch leaves prior
//! state untouched for the caller to render as an explicit error state; no
//! automatic retries.

use booklog_api::{ApiClient, BookDetail};
use booklog_core::{Book, BooklogError, NewBook};
use tracing::{debug, warn};

/// Client-side view of one catalog page plus the active filters.
pub struct CatalogView {
    api: ApiClient,
    page: i64,
    search_term: String,
    genre_filter: String,
    books: Vec<Book>,
    total_pages: i64,
    genres: Vec<String>,
}

impl CatalogView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            page: 1,
            search_term: String::new(),
            genre_filter: String::new(),
            books: Vec::new(),
            total_pages: 1,
            genres: Vec::new(),
        }
    }

    /// Fetch `page` with the current search term and genre filter, replacing
    /// the view's contents wholesale.
    pub async fn load(&mut self, page: i64) -> Result<(), BooklogError> {
        let fetched = self
            .api
            .list_books(&self.search_term, &self.genre_filter, page)
            .await?;
        self.page = page;
        self.books = fetched.books;
        self.total_pages = fetched.total_pages;
        debug!(page, books = self.books.len(), "catalog page loaded");
        Ok(())
    }

    /// Apply a new search term and genre filter, resetting to page 1.
    ///
    /// Passing empty strings clears the filters; they are never sticky
    /// across an explicit reset.
    pub async fn search(&mut self, term: &str, genre: &str) -> Result<(), BooklogError> {
        self.search_term = term.to_string();
        self.genre_filter = genre.to_string();
        self.load(1).await
    }

    /// Hero-search entry point: clears the genre filter and forces page 1.
    ///
    /// An empty term is a no-op. This method resolving is the "results have
    /// arrived" signal; the renderer scrolls to the explore region only
    /// after it returns.
    pub async fn hero_search(&mut self, term: &str) -> Result<(), BooklogError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(());
        }
        self.search(term, "").await
    }

    /// Fetch the distinct genre list for filter population.
    ///
    /// Idempotent and side-effect free on failure: a fetch error is logged
    /// and the existing options are left as-is.
    pub async fn load_genres(&mut self) {
        match self.api.list_genres().await {
            Ok(genres) => self.genres = genres,
            Err(e) => warn!(error = %e, "failed to load genres, keeping existing options"),
        }
    }

    /// Fetch a single book with its embedded reviews.
    ///
    /// This is the canonical source for per-book review data and must be
    /// re-invoked after any review mutation; review lists are never patched
    /// locally.
    pub async fn fetch_detail(&self, book_id: i64) -> Result<BookDetail, BooklogError> {
        self.api.get_book(book_id).await
    }

    /// Submit a new book to the backend. The book only becomes authoritative
    /// once the backend returns its id; the client never synthesizes ids.
    pub async fn submit_book(&self, book: &NewBook) -> Result<Book, BooklogError> {
        self.api.create_book(book).await
    }

    /// Resolve a book on the current page by id.
    pub fn find_book(&self, book_id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == book_id)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn genre_filter(&self) -> &str {
        &self.genre_filter
    }
}
