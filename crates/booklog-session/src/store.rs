// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session store: register, login, logout, and the current identity.
//!
//! Resolves everything against the local credential registry; no network
//! calls are involved. Errors are reported synchronously to the caller.
//! Exactly one session exists per process; it is rehydrated at startup from
//! the persisted pointer if present.

use booklog_config::model::{AuthConfig, StorageConfig};
use booklog_core::{BooklogError, Credential};
use booklog_storage::models::CredentialRecord;
use booklog_storage::queries::{credentials, session};
use booklog_storage::Database;
use tracing::{debug, info, warn};

use crate::password;

/// Which form the auth surface is showing. Only meaningful while
/// unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// The authenticated-identity lifecycle.
pub struct SessionStore {
    db: Database,
    auth_config: AuthConfig,
    user: Option<Credential>,
    mode: AuthMode,
}

impl SessionStore {
    /// Open the local database and rehydrate the session from the persisted
    /// pointer, if any. A pointer referencing an unknown credential is
    /// cleared rather than trusted.
    pub async fn open(
        storage: &StorageConfig,
        auth: &AuthConfig,
    ) -> Result<Self, BooklogError> {
        let db = Database::open(&storage.database_path).await?;

        let user = match session::get_current(&db).await? {
            Some(username) => match credentials::get(&db, &username).await? {
                Some(record) => {
                    debug!(username = %username, "session rehydrated from pointer");
                    Some(record.to_credential())
                }
                None => {
                    warn!(username = %username, "session pointer references unknown credential, clearing");
                    session::clear_current(&db).await?;
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            db,
            auth_config: auth.clone(),
            user,
            mode: AuthMode::Login,
        })
    }

    /// Register a new credential and establish it as the current session.
    ///
    /// Downstream stores must be (re)initialized after this call.
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), BooklogError> {
        let username = username.trim();
        let email = email.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(BooklogError::Validation(
                "username and password are required".to_string(),
            ));
        }
        if email.is_empty() {
            return Err(BooklogError::Validation("email is required".to_string()));
        }
        if !email.contains('@') {
            return Err(BooklogError::Validation(
                "email must contain an '@'".to_string(),
            ));
        }
        if password.len() < 4 {
            return Err(BooklogError::Validation(
                "password must be at least 4 characters long".to_string(),
            ));
        }

        if credentials::exists(&self.db, username).await? {
            return Err(BooklogError::Conflict(format!(
                "username `{username}` is already taken"
            )));
        }

        let record = CredentialRecord {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password::hash_password(password, &self.auth_config)?,
            registered_at: chrono::Utc::now().to_rfc3339(),
        };
        credentials::insert(&self.db, &record).await?;
        session::set_current(&self.db, username).await?;

        self.user = Some(record.to_credential());
        info!(username = %username, "registered and logged in");
        Ok(())
    }

    /// Log in with an existing credential and establish the session.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), BooklogError> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(BooklogError::Validation(
                "username and password are required".to_string(),
            ));
        }

        let record = credentials::get(&self.db, username).await?.ok_or_else(|| {
            BooklogError::NotFound(format!("username `{username}` is not registered"))
        })?;

        if !password::verify_password(password, &record.password_hash)? {
            return Err(BooklogError::Auth("incorrect password".to_string()));
        }

        session::set_current(&self.db, username).await?;
        self.user = Some(record.to_credential());
        info!(username = %username, "logged in");
        Ok(())
    }

    /// Clear the session pointer and the in-memory user.
    ///
    /// The yes/no confirmation decision lives with the caller; invoking this
    /// is the post-confirmation action. Callers must also discard the
    /// user-scoped stores (the root controller does both in one step).
    pub async fn logout(&mut self) -> Result<(), BooklogError> {
        session::clear_current(&self.db).await?;
        self.user = None;
        self.mode = AuthMode::Login;
        info!("logged out");
        Ok(())
    }

    /// The display name for the active session, or `None`.
    pub fn current_identity(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    /// The full public identity for the active session, or `None`.
    pub fn current_user(&self) -> Option<&Credential> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Which auth form is showing.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Flip between the login and register forms. A no-op while a user is
    /// authenticated.
    pub fn toggle_mode(&mut self) {
        if self.user.is_some() {
            return;
        }
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
    }
}
