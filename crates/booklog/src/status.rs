// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `booklog status` command implementation.
//!
//! Prints the effective configuration, the persisted session identity, and
//! the backend's health.

use booklog_api::ApiClient;
use booklog_config::BooklogConfig;
use booklog_core::BooklogError;
use booklog_session::SessionStore;
use colored::Colorize;

/// Runs the `booklog status` command.
pub async fn run_status(config: &BooklogConfig) -> Result<(), BooklogError> {
    println!("{}", "booklog status".bold());
    println!("  api:     {}", config.api.base_url);
    println!("  storage: {}", config.storage.database_path);

    let api = ApiClient::new(&config.api)?;
    match api.health().await {
        Ok(()) => println!("  backend: {}", "reachable".green()),
        Err(e) => println!("  backend: {} ({e})", "unreachable".red()),
    }

    let session = SessionStore::open(&config.storage, &config.auth).await?;
    match session.current_identity() {
        Some(username) => println!("  session: {}", username.cyan()),
        None => println!("  session: {}", "unauthenticated".dimmed()),
    }

    Ok(())
}
