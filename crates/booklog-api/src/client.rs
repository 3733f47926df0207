// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Booklog backend REST API.
//!
//! Provides [`ApiClient`] which handles request construction, query-parameter
//! omission rules, and error-status classification. There are no retries and
//! no backoff: every store in this workspace decides at the call site what a
//! failure means to the user.

use std::time::Duration;

use booklog_config::model::ApiConfig;
use booklog_core::{
    Book, BooklogError, NewBook, NewReview, NewShelfEntry, Review, ShelfEntry, ShelfStatus,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{ApiErrorBody, BookDetail, CatalogPage};

/// HTTP client for backend communication.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new API client from configuration.
    ///
    /// `base_url` is expected to include the `/api` prefix.
    pub fn new(config: &ApiConfig) -> Result<Self, BooklogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BooklogError::Network {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /books?search=&genre=&page=` -- one catalog page.
    ///
    /// Empty `search`/`genre` omit the query parameter entirely.
    pub async fn list_books(
        &self,
        search: &str,
        genre: &str,
        page: i64,
    ) -> Result<CatalogPage, BooklogError> {
        let mut query: Vec<(&str, String)> = vec![("page", page.to_string())];
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        if !genre.is_empty() {
            query.push(("genre", genre.to_string()));
        }

        let response = self
            .client
            .get(self.url("/books"))
            .query(&query)
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, page, "catalog page response");

        if !status.is_success() {
            return Err(unexpected_status("failed to list books", response).await);
        }
        parse_json(response, "catalog page").await
    }

    /// `GET /books/{id}` -- a single book with its embedded reviews.
    pub async fn get_book(&self, book_id: i64) -> Result<BookDetail, BooklogError> {
        let response = self
            .client
            .get(self.url(&format!("/books/{book_id}")))
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, book_id, "book detail response");

        if !status.is_success() {
            return Err(unexpected_status("failed to fetch book", response).await);
        }
        parse_json(response, "book detail").await
    }

    /// `POST /books` -- create a book. The returned server-assigned id is
    /// the only id this layer will ever use for it.
    pub async fn create_book(&self, book: &NewBook) -> Result<Book, BooklogError> {
        let response = self
            .client
            .post(self.url("/books"))
            .json(book)
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, title = %book.title, "book create response");

        if !status.is_success() {
            return Err(unexpected_status("failed to create book", response).await);
        }
        parse_json(response, "created book").await
    }

    /// `GET /genres` -- the distinct genre list.
    pub async fn list_genres(&self) -> Result<Vec<String>, BooklogError> {
        let response = self
            .client
            .get(self.url("/genres"))
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, "genre list response");

        if !status.is_success() {
            return Err(unexpected_status("failed to list genres", response).await);
        }
        parse_json(response, "genre list").await
    }

    /// `POST /reviews` -- submit a review.
    pub async fn create_review(&self, review: &NewReview) -> Result<Review, BooklogError> {
        let response = self
            .client
            .post(self.url("/reviews"))
            .json(review)
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, book_id = review.book_id, "review create response");

        if !status.is_success() {
            return Err(unexpected_status("failed to post review", response).await);
        }
        parse_json(response, "created review").await
    }

    /// `DELETE /reviews/{id}`.
    pub async fn delete_review(&self, review_id: i64) -> Result<(), BooklogError> {
        let response = self
            .client
            .delete(self.url(&format!("/reviews/{review_id}")))
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, review_id, "review delete response");

        if !status.is_success() {
            return Err(unexpected_status("failed to delete review", response).await);
        }
        Ok(())
    }

    /// `GET /journal` -- all shelf entries for the implicit current user.
    pub async fn list_journal(&self) -> Result<Vec<ShelfEntry>, BooklogError> {
        let response = self
            .client
            .get(self.url("/journal"))
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, "journal list response");

        if !status.is_success() {
            return Err(unexpected_status("failed to load shelf", response).await);
        }
        parse_json(response, "shelf entries").await
    }

    /// `POST /journal` -- create a shelf entry.
    ///
    /// A 400 whose body names an existing entry for the book maps to
    /// [`BooklogError::Conflict`] so callers can say "already on your shelf"
    /// instead of reporting a generic failure. Any other non-success status
    /// stays a network error.
    pub async fn create_journal_entry(
        &self,
        entry: &NewShelfEntry,
    ) -> Result<ShelfEntry, BooklogError> {
        let response = self
            .client
            .post(self.url("/journal"))
            .json(entry)
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, book_id = entry.book_id, "journal create response");

        if status.is_success() {
            return parse_json(response, "created shelf entry").await;
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::BAD_REQUEST
            && serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.to_lowercase().contains("already exists"))
                .unwrap_or(false)
        {
            return Err(BooklogError::Conflict(
                "a shelf entry for this book already exists".to_string(),
            ));
        }
        Err(BooklogError::network(format!(
            "failed to add shelf entry: backend returned {status}: {body}"
        )))
    }

    /// `PUT /journal/{id}` -- update a shelf entry's status.
    pub async fn update_journal_entry(
        &self,
        entry_id: i64,
        status: ShelfStatus,
    ) -> Result<ShelfEntry, BooklogError> {
        let response = self
            .client
            .put(self.url(&format!("/journal/{entry_id}")))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await
            .map_err(send_err)?;
        let http_status = response.status();
        debug!(status = %http_status, entry_id, "journal update response");

        if !http_status.is_success() {
            return Err(unexpected_status("failed to update shelf entry", response).await);
        }
        parse_json(response, "updated shelf entry").await
    }

    /// `DELETE /journal/{id}`.
    pub async fn delete_journal_entry(&self, entry_id: i64) -> Result<(), BooklogError> {
        let response = self
            .client
            .delete(self.url(&format!("/journal/{entry_id}")))
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();
        debug!(status = %status, entry_id, "journal delete response");

        if !status.is_success() {
            return Err(unexpected_status("failed to remove shelf entry", response).await);
        }
        Ok(())
    }

    /// `GET /health` -- backend liveness probe.
    pub async fn health(&self) -> Result<(), BooklogError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(send_err)?;
        let status = response.status();

        if !status.is_success() {
            return Err(unexpected_status("backend health check failed", response).await);
        }
        Ok(())
    }
}

fn send_err(e: reqwest::Error) -> BooklogError {
    BooklogError::Network {
        message: format!("HTTP request failed: {e}"),
        source: Some(Box::new(e)),
    }
}

async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T, BooklogError> {
    let body = response.text().await.map_err(|e| BooklogError::Network {
        message: format!("failed to read response body: {e}"),
        source: Some(Box::new(e)),
    })?;
    serde_json::from_str(&body).map_err(|e| BooklogError::Network {
        message: format!("failed to parse {what}: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Classify a non-success response: 404 becomes `NotFound`, everything else
/// a `Network` error carrying the status and best-effort body text.
async fn unexpected_status(context: &str, response: reqwest::Response) -> BooklogError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(api_err) => api_err.error,
        Err(_) => body,
    };

    if status == StatusCode::NOT_FOUND {
        BooklogError::NotFound(format!("{context}: {detail}"))
    } else {
        BooklogError::network(format!("{context}: backend returned {status}: {detail}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booklog_core::ShelfStatus;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn dune_json() -> serde_json::Value {
        serde_json::json!({
            "id": 3, "title": "Dune", "author": "Frank Herbert",
            "isbn": "9780441013593", "genre": "SciFi",
            "publication_year": 1965, "cover_image": "https://covers.example/dune.jpg",
            "description": "Spice.", "rating": 4.5, "review_count": 2
        })
    }

    #[tokio::test]
    async fn list_books_omits_empty_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/books"))
            .and(query_param("page", "1"))
            .and(query_param_is_missing("search"))
            .and(query_param_is_missing("genre"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "books": [dune_json()], "total": 1, "pages": 1, "current_page": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = test_client(&server.uri()).list_books("", "", 1).await.unwrap();
        assert_eq!(page.books.len(), 1);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn list_books_sends_filters_and_accepts_total_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/books"))
            .and(query_param("search", "dune"))
            .and(query_param("genre", "SciFi"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "books": [], "total_pages": 7
            })))
            .mount(&server)
            .await;

        let page = test_client(&server.uri())
            .list_books("dune", "SciFi", 2)
            .await
            .unwrap();
        assert!(page.books.is_empty());
        assert_eq!(page.total_pages, 7);
    }

    #[tokio::test]
    async fn get_book_returns_detail_with_reviews() {
        let server = MockServer::start().await;

        let mut body = dune_json();
        body["reviews"] = serde_json::json!([
            {"id": 9, "book_id": 3, "reviewer_name": "alice", "rating": 5,
             "comment": "a classic", "created_at": "2026-02-01T09:00:00"}
        ]);

        Mock::given(method("GET"))
            .and(path("/books/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let detail = test_client(&server.uri()).get_book(3).await.unwrap();
        assert_eq!(detail.book.title, "Dune");
        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.reviews[0].rating, 5);
    }

    #[tokio::test]
    async fn get_book_404_maps_to_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/books/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = test_client(&server.uri()).get_book(99).await.unwrap_err();
        assert!(matches!(err, BooklogError::NotFound(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn create_book_accepts_201() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/books"))
            .respond_with(ResponseTemplate::new(201).set_body_json(dune_json()))
            .mount(&server)
            .await;

        let book = test_client(&server.uri())
            .create_book(&NewBook {
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                isbn: None,
                publication_year: None,
                genre: "SciFi".into(),
                cover_image: "u".into(),
                description: None,
                rating: 0.0,
            })
            .await
            .unwrap();
        assert_eq!(book.id, 3);
    }

    #[tokio::test]
    async fn create_review_posts_expected_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reviews"))
            .and(body_json(serde_json::json!({
                "book_id": 3, "reviewer_name": "alice", "rating": 4, "comment": "solid"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 11, "book_id": 3, "reviewer_name": "alice", "rating": 4,
                "comment": "solid", "created_at": "2026-02-01T09:00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let review = test_client(&server.uri())
            .create_review(&NewReview {
                book_id: 3,
                reviewer_name: "alice".into(),
                rating: 4,
                comment: "solid".into(),
            })
            .await
            .unwrap();
        assert_eq!(review.id, 11);
    }

    #[tokio::test]
    async fn create_journal_conflict_maps_to_conflict() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/journal"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Entry already exists for this book"
            })))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .create_journal_entry(&NewShelfEntry {
                book_id: 3,
                status: ShelfStatus::WantToRead,
                user_notes: String::new(),
                rating: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BooklogError::Conflict(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn create_journal_other_400_stays_network_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/journal"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "book_id is required"
            })))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .create_journal_entry(&NewShelfEntry {
                book_id: 3,
                status: ShelfStatus::Reading,
                user_notes: String::new(),
                rating: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BooklogError::Network { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn update_journal_sends_status_body() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/journal/5"))
            .and(body_json(serde_json::json!({"status": "completed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 5, "book_id": 3, "book_title": "Dune",
                "user_notes": null, "status": "completed", "rating": null,
                "created_at": "2026-02-01T09:00:00", "updated_at": "2026-02-02T09:00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let entry = test_client(&server.uri())
            .update_journal_entry(5, ShelfStatus::Completed)
            .await
            .unwrap();
        assert_eq!(entry.status, ShelfStatus::Completed);
    }

    #[tokio::test]
    async fn delete_endpoints_accept_empty_204() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/reviews/9"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/journal/5"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client.delete_review(9).await.unwrap();
        client.delete_journal_entry(5).await.unwrap();
    }

    #[tokio::test]
    async fn list_genres_returns_plain_strings() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/genres"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!(["Fantasy", "SciFi"])),
            )
            .mount(&server)
            .await;

        let genres = test_client(&server.uri()).list_genres().await.unwrap();
        assert_eq!(genres, vec!["Fantasy", "SciFi"]);
    }

    #[tokio::test]
    async fn list_journal_parses_entries() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/journal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 5, "book_id": 3, "book_title": "Dune", "user_notes": "spice",
                 "status": "want-to-read", "rating": null,
                 "created_at": "2026-02-01T09:00:00", "updated_at": "2026-02-01T09:00:00"}
            ])))
            .mount(&server)
            .await;

        let entries = test_client(&server.uri()).list_journal().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].book_title, "Dune");
        assert_eq!(entries[0].status, ShelfStatus::WantToRead);
    }
}
