// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Current-session pointer operations.
//!
//! The pointer is a single row written on register/login, cleared on logout,
//! and read once at startup. Only one logical session is ever active.

use booklog_core::BooklogError;
use rusqlite::params;

use crate::database::Database;

/// Point the current session at `username`.
pub async fn set_current(db: &Database, username: &str) -> Result<(), BooklogError> {
    let username = username.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO current_session (id, username) VALUES (1, ?1)",
                params![username],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Read the persisted session pointer, if any.
pub async fn get_current(db: &Database) -> Result<Option<String>, BooklogError> {
    db.connection()
        .call(|conn| {
            let result = conn.query_row(
                "SELECT username FROM current_session WHERE id = 1",
                [],
                |row| row.get::<_, String>(0),
            );
            match result {
                Ok(username) => Ok(Some(username)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Clear the session pointer (logout).
pub async fn clear_current(db: &Database) -> Result<(), BooklogError> {
    db.connection()
        .call(|conn| {
            conn.execute("DELETE FROM current_session WHERE id = 1", [])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
