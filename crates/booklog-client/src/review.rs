// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Review store: submission, deletion, and the per-user profile aggregate.
//!
//! Reviews are never cached beyond the currently open book detail (owned by
//! the root controller); after any mutation the detail is refetched in full
//! so the server's aggregate rating and review count stay authoritative.

use booklog_api::{ApiClient, BookDetail};
use booklog_core::{Book, BooklogError, NewReview, Review};
use tracing::debug;

use crate::rating::RatingPicker;

/// One of the user's reviews joined with its source book, for profile
/// display.
#[derive(Debug, Clone)]
pub struct ProfileReview {
    pub review: Review,
    pub book_id: i64,
    pub book_title: String,
    pub book_cover: Option<String>,
}

/// Review mutation flows and the review-form rating picker.
pub struct ReviewStore {
    api: ApiClient,
    picker: RatingPicker,
}

impl ReviewStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            picker: RatingPicker::new(),
        }
    }

    /// Fetch the reviews for a book via the canonical book-detail request.
    pub async fn load_for_book(&self, book_id: i64) -> Result<BookDetail, BooklogError> {
        self.api.get_book(book_id).await
    }

    /// Submit a review for `book_id` authored by `reviewer_name`.
    ///
    /// Rejected locally with a validation error when the picker's committed
    /// rating is 0 -- no network request is issued. On success the picker is
    /// reset; the caller refetches the book detail in full.
    pub async fn submit(
        &mut self,
        book_id: i64,
        reviewer_name: &str,
        comment: &str,
    ) -> Result<Review, BooklogError> {
        let rating = self.picker.committed();
        if rating == 0 {
            return Err(BooklogError::Validation(
                "please select a rating".to_string(),
            ));
        }

        let created = self
            .api
            .create_review(&NewReview {
                book_id,
                reviewer_name: reviewer_name.to_string(),
                rating,
                comment: comment.trim().to_string(),
            })
            .await?;
        self.picker.reset();
        debug!(review_id = created.id, book_id, "review posted");
        Ok(created)
    }

    /// Delete a review.
    ///
    /// Display-layer ownership gate: only reviews whose `reviewer_name`
    /// equals the acting username may be deleted from here. The backend is
    /// the actual authority; this is not a security boundary.
    pub async fn remove(
        &self,
        review: &Review,
        current_username: &str,
    ) -> Result<(), BooklogError> {
        if review.reviewer_name != current_username {
            return Err(BooklogError::Validation(
                "only your own reviews can be deleted".to_string(),
            ));
        }
        self.api.delete_review(review.id).await
    }

    /// Assemble the user's reviews across `books`, each joined with its
    /// source book's title and cover.
    ///
    /// Deliberately sequential rather than parallel: it bounds concurrent
    /// load on the backend and keeps ordering trivial. The result is only as
    /// fresh as the moment it was computed and is never cached.
    pub async fn aggregate_for_user(
        &self,
        username: &str,
        books: &[Book],
    ) -> Result<Vec<ProfileReview>, BooklogError> {
        let mut out = Vec::new();
        for book in books {
            let detail = self.api.get_book(book.id).await?;
            for review in detail
                .reviews
                .into_iter()
                .filter(|r| r.reviewer_name == username)
            {
                out.push(ProfileReview {
                    review,
                    book_id: book.id,
                    book_title: book.title.clone(),
                    book_cover: book.cover_image.clone(),
                });
            }
        }
        debug!(reviews = out.len(), username = %username, "profile aggregate computed");
        Ok(out)
    }

    /// The review-form rating picker.
    pub fn picker(&mut self) -> &mut RatingPicker {
        &mut self.picker
    }

    /// Reset the picker. Mandatory on logout and whenever the review form
    /// opens or closes.
    pub fn clear(&mut self) {
        self.picker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booklog_config::model::ApiConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> ReviewStore {
        let api = ApiClient::new(&ApiConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap();
        ReviewStore::new(api)
    }

    fn review(id: i64, book_id: i64, reviewer: &str, rating: u8) -> Review {
        Review {
            id,
            book_id,
            reviewer_name: reviewer.to_string(),
            rating,
            comment: None,
            created_at: "2026-02-01T09:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_with_unset_rating_is_rejected_locally() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/reviews"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut store = store_for(&server);
        let err = store.submit(3, "alice", "great book").await.unwrap_err();
        assert!(matches!(err, BooklogError::Validation(_)), "got: {err:?}");
        // The mock's expect(0) verifies no request was issued.
    }

    #[tokio::test]
    async fn submit_posts_committed_rating_and_resets_picker() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/reviews"))
            .and(body_json(serde_json::json!({
                "book_id": 3, "reviewer_name": "alice", "rating": 5, "comment": "a classic"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 11, "book_id": 3, "reviewer_name": "alice", "rating": 5,
                "comment": "a classic", "created_at": "2026-02-01T09:00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut store = store_for(&server);
        store.picker().click(5);
        let created = store.submit(3, "alice", "  a classic  ").await.unwrap();
        assert_eq!(created.id, 11);
        assert_eq!(store.picker().committed(), 0);
    }

    #[tokio::test]
    async fn remove_rejects_foreign_reviews_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/reviews/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let store = store_for(&server);
        let err = store
            .remove(&review(9, 3, "bob", 4), "alice")
            .await
            .unwrap_err();
        assert!(matches!(err, BooklogError::Validation(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn remove_deletes_own_review() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/reviews/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server);
        store.remove(&review(9, 3, "alice", 4), "alice").await.unwrap();
    }

    #[tokio::test]
    async fn aggregate_filters_by_reviewer_and_joins_book_metadata() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/books/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1, "title": "Dune", "author": "Herbert",
                "cover_image": "dune.jpg", "rating": 4.0, "review_count": 2,
                "reviews": [
                    {"id": 1, "book_id": 1, "reviewer_name": "alice", "rating": 5,
                     "comment": null, "created_at": "2026-02-01T09:00:00"},
                    {"id": 2, "book_id": 1, "reviewer_name": "bob", "rating": 3,
                     "comment": null, "created_at": "2026-02-01T10:00:00"}
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/books/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 2, "title": "Emma", "author": "Austen",
                "rating": 0.0, "review_count": 1,
                "reviews": [
                    {"id": 3, "book_id": 2, "reviewer_name": "alice", "rating": 4,
                     "comment": "lovely", "created_at": "2026-02-02T09:00:00"}
                ]
            })))
            .mount(&server)
            .await;

        let books = vec![
            Book {
                id: 1,
                title: "Dune".into(),
                author: "Herbert".into(),
                isbn: None,
                publication_year: None,
                genre: None,
                cover_image: Some("dune.jpg".into()),
                description: None,
                rating: 4.0,
                review_count: 2,
            },
            Book {
                id: 2,
                title: "Emma".into(),
                author: "Austen".into(),
                isbn: None,
                publication_year: None,
                genre: None,
                cover_image: None,
                description: None,
                rating: 0.0,
                review_count: 1,
            },
        ];

        let store = store_for(&server);
        let profile = store.aggregate_for_user("alice", &books).await.unwrap();

        assert_eq!(profile.len(), 2);
        assert_eq!(profile[0].book_title, "Dune");
        assert_eq!(profile[0].review.rating, 5);
        assert_eq!(profile[0].book_cover.as_deref(), Some("dune.jpg"));
        assert_eq!(profile[1].book_title, "Emma");
        assert!(profile.iter().all(|p| p.review.reviewer_name == "alice"));
    }
}
