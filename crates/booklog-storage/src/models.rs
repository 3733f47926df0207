// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row types for the local persistence tables.

use booklog_core::Credential;

/// A credential registry row. Unlike [`Credential`], this carries the
/// password hash and never crosses the session-store boundary.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub registered_at: String,
}

impl CredentialRecord {
    /// Project the record to its public identity.
    pub fn to_credential(&self) -> Credential {
        Credential {
            username: self.username.clone(),
            email: self.email.clone(),
            registered_at: self.registered_at.clone(),
        }
    }
}
