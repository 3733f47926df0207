// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session store for the Booklog client.
//!
//! Owns the authenticated-identity lifecycle: registration against the
//! local credential registry, login, logout, and startup rehydration of the
//! persisted session. Passwords are Argon2id-hashed at rest.

pub mod password;
pub mod store;

pub use store::{AuthMode, SessionStore};
