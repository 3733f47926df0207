// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential registry operations.
//!
//! Usernames are a case-sensitive primary key. Records are write-once:
//! there is no update path, matching the immutable-after-registration
//! lifecycle of a credential.

use booklog_core::BooklogError;
use rusqlite::params;

use crate::database::Database;
use crate::models::CredentialRecord;

/// Insert a new credential record.
///
/// Callers are expected to check [`exists`] first; a primary-key collision
/// here surfaces as a storage error, not a domain conflict.
pub async fn insert(db: &Database, record: &CredentialRecord) -> Result<(), BooklogError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO credentials (username, email, password_hash, registered_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.username,
                    record.email,
                    record.password_hash,
                    record.registered_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Fetch the credential record for `username`, if registered.
pub async fn get(db: &Database, username: &str) -> Result<Option<CredentialRecord>, BooklogError> {
    let username = username.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                "SELECT username, email, password_hash, registered_at
                 FROM credentials WHERE username = ?1",
                params![username],
                |row| {
                    Ok(CredentialRecord {
                        username: row.get(0)?,
                        email: row.get(1)?,
                        password_hash: row.get(2)?,
                        registered_at: row.get(3)?,
                    })
                },
            );
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Returns true if a credential is registered under `username`.
pub async fn exists(db: &Database, username: &str) -> Result<bool, BooklogError> {
    let username = username.to_string();
    db.connection()
        .call(move |conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM credentials WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )?;
            Ok(count > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
