// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed HTTP client for the Booklog backend REST contract.
//!
//! This crate is the single place the backend wire format is known. Every
//! store in `booklog-client` goes through [`ApiClient`]; none of them build
//! requests or interpret statuses themselves.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{BookDetail, CatalogPage};
