// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shelf store: the current user's reading-journal entries.
//!
//! The invariant here is that the store never mutates an entry locally and
//! calls it done: every successful mutation is followed by a full refetch,
//! so the visible state is always the last successful backend read, never a
//! locally computed guess. On failure, prior state is left untouched.

use booklog_api::ApiClient;
use booklog_core::{BooklogError, NewShelfEntry, ShelfEntry, ShelfStatus};
use tracing::debug;

use crate::rating::RatingPicker;

/// The full ordered set of the current user's shelf entries, replaced
/// wholesale on every refresh. Owns the shelf-form rating picker.
pub struct ShelfStore {
    api: ApiClient,
    entries: Vec<ShelfEntry>,
    picker: RatingPicker,
}

impl ShelfStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            entries: Vec::new(),
            picker: RatingPicker::new(),
        }
    }

    /// Fetch all entries for the session user, replacing state wholesale.
    pub async fn refresh(&mut self) -> Result<(), BooklogError> {
        self.entries = self.api.list_journal().await?;
        debug!(entries = self.entries.len(), "shelf refreshed");
        Ok(())
    }

    /// Create a shelf entry for `book_id`, then refresh so the server's id
    /// and denormalized fields become authoritative.
    ///
    /// The shelf picker's committed value is read here; 0 means "no rating"
    /// and is accepted (the field is optional for shelf entries). A
    /// [`BooklogError::Conflict`] passes through distinctly so the caller
    /// can say "already on your shelf -- update instead".
    pub async fn add_entry(
        &mut self,
        book_id: i64,
        status: ShelfStatus,
        notes: &str,
    ) -> Result<(), BooklogError> {
        let entry = NewShelfEntry {
            book_id,
            status,
            user_notes: notes.to_string(),
            rating: self.picker.rating(),
        };
        self.api.create_journal_entry(&entry).await?;
        self.picker.reset();
        self.refresh().await
    }

    /// Update an entry's status. No optimistic flip: the visible state
    /// reflects only confirmed or pre-update state, never a guessed
    /// intermediate one.
    pub async fn update_status(
        &mut self,
        entry_id: i64,
        new_status: ShelfStatus,
    ) -> Result<(), BooklogError> {
        self.api.update_journal_entry(entry_id, new_status).await?;
        self.refresh().await
    }

    /// Delete an entry, then refresh. Confirmation is the caller's concern.
    pub async fn remove_entry(&mut self, entry_id: i64) -> Result<(), BooklogError> {
        self.api.delete_journal_entry(entry_id).await?;
        self.refresh().await
    }

    /// Pure projection: the subsequence matching `status` in fetch order,
    /// or everything for `None`.
    pub fn filtered_by(&self, status: Option<ShelfStatus>) -> Vec<&ShelfEntry> {
        self.entries
            .iter()
            .filter(|e| status.is_none_or(|s| e.status == s))
            .collect()
    }

    pub fn entries(&self) -> &[ShelfEntry] {
        &self.entries
    }

    /// Resolve an entry by id.
    pub fn find_entry(&self, entry_id: i64) -> Option<&ShelfEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// The shelf-form rating picker.
    pub fn picker(&mut self) -> &mut RatingPicker {
        &mut self.picker
    }

    /// Discard all in-memory entries and reset the picker. Mandatory on
    /// logout so one user's shelf never leaks across a login switch.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.picker.reset();
    }
}
