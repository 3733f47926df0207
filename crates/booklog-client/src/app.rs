// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The root controller owning all client state.
//!
//! There are no ambient globals: the session, catalog, shelf, and review
//! stores live here and are passed by reference to whoever renders them.
//! The controller enforces the cross-store sequencing rules: session
//! establishment initializes the downstream stores, logout discards
//! user-scoped state in the same step, and every review mutation is followed
//! by a full detail refetch before the visible state is replaced.

use booklog_api::{ApiClient, BookDetail};
use booklog_config::BooklogConfig;
use booklog_core::{BooklogError, NewBook, ShelfStatus};
use booklog_session::{AuthMode, SessionStore};
use tracing::warn;

use crate::catalog::CatalogView;
use crate::review::{ProfileReview, ReviewStore};
use crate::shelf::ShelfStore;

/// Application state: one session, one catalog view, one shelf, one review
/// store. Everything user-visible is a projection of this struct.
pub struct App {
    session: SessionStore,
    catalog: CatalogView,
    shelf: ShelfStore,
    reviews: ReviewStore,
    open_book: Option<BookDetail>,
}

impl App {
    /// Open local storage, rehydrate the session, and -- when a session was
    /// rehydrated -- initialize the downstream stores. A failed initial fetch
    /// is logged and left for the renderer to surface as an error state; it
    /// does not abort startup.
    pub async fn new(config: &BooklogConfig) -> Result<Self, BooklogError> {
        let api = ApiClient::new(&config.api)?;
        let session = SessionStore::open(&config.storage, &config.auth).await?;

        let mut app = Self {
            session,
            catalog: CatalogView::new(api.clone()),
            shelf: ShelfStore::new(api.clone()),
            reviews: ReviewStore::new(api),
            open_book: None,
        };

        if app.session.is_authenticated() {
            if let Err(e) = app.init_stores().await {
                warn!(error = %e, "initial store load failed");
            }
        }
        Ok(app)
    }

    /// Load the first catalog page, the genre list, and the user's shelf.
    /// Runs after every session establishment.
    async fn init_stores(&mut self) -> Result<(), BooklogError> {
        self.catalog.load(1).await?;
        self.catalog.load_genres().await;
        self.shelf.refresh().await?;
        Ok(())
    }

    fn require_identity(&self) -> Result<String, BooklogError> {
        self.session
            .current_identity()
            .map(String::from)
            .ok_or_else(|| BooklogError::Auth("no active session".to_string()))
    }

    // --- Session ---

    /// Register a new account and initialize the downstream stores.
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), BooklogError> {
        self.session.register(username, email, password).await?;
        self.init_stores().await
    }

    /// Log in and initialize the downstream stores.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), BooklogError> {
        self.session.login(username, password).await?;
        self.init_stores().await
    }

    /// Log out, discarding the user-scoped stores in the same step so one
    /// user's shelf and reviews never leak across a login switch.
    ///
    /// The yes/no confirmation decision point lives with the caller; this is
    /// the post-confirmation action.
    pub async fn logout(&mut self) -> Result<(), BooklogError> {
        self.session.logout().await?;
        self.shelf.clear();
        self.reviews.clear();
        self.open_book = None;
        Ok(())
    }

    pub fn current_identity(&self) -> Option<&str> {
        self.session.current_identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.session.mode()
    }

    pub fn toggle_auth_mode(&mut self) {
        self.session.toggle_mode();
    }

    // --- Catalog (session-gated entry points) ---

    pub async fn load_page(&mut self, page: i64) -> Result<(), BooklogError> {
        self.require_identity()?;
        self.catalog.load(page).await
    }

    pub async fn search(&mut self, term: &str, genre: &str) -> Result<(), BooklogError> {
        self.require_identity()?;
        self.catalog.search(term, genre).await
    }

    pub async fn hero_search(&mut self, term: &str) -> Result<(), BooklogError> {
        self.require_identity()?;
        self.catalog.hero_search(term).await
    }

    /// Submit a new book, then reload the current page so the server-assigned
    /// record shows up with its authoritative id.
    pub async fn submit_book(&mut self, book: &NewBook) -> Result<i64, BooklogError> {
        self.require_identity()?;
        let created = self.catalog.submit_book(book).await?;
        if let Err(e) = self.catalog.load(self.catalog.page()).await {
            warn!(error = %e, "catalog reload after book submit failed");
        }
        Ok(created.id)
    }

    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    // --- Book detail ---

    /// Open a book's detail view: fetch it with its reviews and reset the
    /// review form.
    pub async fn open_book(&mut self, book_id: i64) -> Result<&BookDetail, BooklogError> {
        self.require_identity()?;
        let detail = self.catalog.fetch_detail(book_id).await?;
        self.reviews.clear();
        Ok(self.open_book.insert(detail))
    }

    pub fn close_book(&mut self) {
        self.open_book = None;
        self.reviews.clear();
    }

    pub fn open_detail(&self) -> Option<&BookDetail> {
        self.open_book.as_ref()
    }

    // --- Reviews ---

    /// Submit a review for the open book, then refetch the detail in full so
    /// the aggregate rating and review count stay the server's computation.
    pub async fn submit_review(&mut self, comment: &str) -> Result<(), BooklogError> {
        let username = self.require_identity()?;
        let book_id = self
            .open_book
            .as_ref()
            .map(|d| d.book.id)
            .ok_or_else(|| BooklogError::Internal("no book detail is open".to_string()))?;

        self.reviews.submit(book_id, &username, comment).await?;
        let refreshed = self.catalog.fetch_detail(book_id).await?;
        self.open_book = Some(refreshed);
        Ok(())
    }

    /// Delete one of the current user's reviews from the open book, then
    /// refetch the detail. Confirmation is the caller's concern.
    pub async fn remove_review(&mut self, review_id: i64) -> Result<(), BooklogError> {
        let username = self.require_identity()?;
        let detail = self
            .open_book
            .as_ref()
            .ok_or_else(|| BooklogError::Internal("no book detail is open".to_string()))?;
        let review = detail
            .reviews
            .iter()
            .find(|r| r.id == review_id)
            .cloned()
            .ok_or_else(|| {
                BooklogError::NotFound(format!("no review {review_id} on the open book"))
            })?;

        self.reviews.remove(&review, &username).await?;
        let refreshed = self.catalog.fetch_detail(review.book_id).await?;
        self.open_book = Some(refreshed);
        Ok(())
    }

    /// The review-form rating picker.
    pub fn review_picker(&mut self) -> &mut crate::rating::RatingPicker {
        self.reviews.picker()
    }

    /// The current user's reviews joined over the loaded catalog page.
    pub async fn profile(&self) -> Result<Vec<ProfileReview>, BooklogError> {
        let username = self.require_identity()?;
        self.reviews
            .aggregate_for_user(&username, self.catalog.books())
            .await
    }

    // --- Shelf ---

    /// Add the open book to the shelf. Returns the book's title for the
    /// caller's confirmation message. A duplicate entry surfaces as a
    /// distinct conflict, not a generic failure.
    pub async fn add_to_shelf(
        &mut self,
        status: ShelfStatus,
        notes: &str,
    ) -> Result<String, BooklogError> {
        self.require_identity()?;
        let (book_id, title) = self
            .open_book
            .as_ref()
            .map(|d| (d.book.id, d.book.title.clone()))
            .ok_or_else(|| BooklogError::Internal("no book detail is open".to_string()))?;

        self.shelf.add_entry(book_id, status, notes).await?;
        Ok(title)
    }

    pub async fn update_shelf_status(
        &mut self,
        entry_id: i64,
        status: ShelfStatus,
    ) -> Result<(), BooklogError> {
        self.require_identity()?;
        self.shelf.update_status(entry_id, status).await
    }

    /// Remove a shelf entry. Confirmation is the caller's concern.
    pub async fn remove_shelf_entry(&mut self, entry_id: i64) -> Result<(), BooklogError> {
        self.require_identity()?;
        self.shelf.remove_entry(entry_id).await
    }

    pub async fn refresh_shelf(&mut self) -> Result<(), BooklogError> {
        self.require_identity()?;
        self.shelf.refresh().await
    }

    pub fn shelf(&self) -> &ShelfStore {
        &self.shelf
    }

    /// The shelf-form rating picker.
    pub fn shelf_picker(&mut self) -> &mut crate::rating::RatingPicker {
        self.shelf.picker()
    }
}
