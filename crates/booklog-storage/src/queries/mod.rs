// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules over the local database.

pub mod credentials;
pub mod session;
