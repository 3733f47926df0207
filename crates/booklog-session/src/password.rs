// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password hashing with Argon2id.
//!
//! Credentials are hashed at rest even though the observable contract is
//! plain equality of the presented password. The PHC string stored in the
//! registry embeds its own salt and parameters, so verification does not
//! depend on the current [`AuthConfig`].

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Version};
use booklog_config::model::AuthConfig;
use booklog_core::BooklogError;

/// Hash a password into a PHC string using the configured Argon2id
/// parameters and a fresh random salt.
pub fn hash_password(password: &str, config: &AuthConfig) -> Result<String, BooklogError> {
    let params = argon2::Params::new(
        config.kdf_memory_cost,
        config.kdf_iterations,
        config.kdf_parallelism,
        None,
    )
    .map_err(|e| BooklogError::Internal(format!("invalid Argon2id parameters: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| BooklogError::Internal(format!("password hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a presented password against a stored PHC string.
///
/// Returns `Ok(false)` on mismatch; `Err` only for a corrupted hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, BooklogError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| BooklogError::Internal(format!("corrupted password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
