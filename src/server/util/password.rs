//! Credential hashing and registration rules.
//!
//! Hashes are Argon2id PHC strings, so the algorithm parameters and salt travel with
//! the stored value.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{auth::AuthError, AppError};

pub const MIN_PASSWORD_LEN: usize = 3;

/// Hashes a password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted Argon2id hash
/// - `Err(AuthError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC hash.
///
/// A stored value that is not a valid PHC string (for example the placeholder of an
/// account without a usable password) never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Applies the registration rules to a candidate password.
///
/// # Returns
/// - `Ok(())` - Password accepted
/// - `Err(AuthError::InvalidPassword)` - Too short or contains the email
pub fn validate_password(password: &str, email: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidPassword(format!(
            "Password should be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if !email.is_empty() && password.contains(email) {
        return Err(AuthError::InvalidPassword(
            "Password should not contain e-mail".to_string(),
        ));
    }

    Ok(())
}

/// Minimal shape check: a non-empty local part and domain around a single `@`.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(AuthError::InvalidEmail(email.to_string())),
    }
}
