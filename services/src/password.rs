use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use sea_orm::DbErr;

use crate::error::ServiceError;

/// Hashes a plaintext password with argon2id and a random per-password salt.
///
/// The work factor is argon2's default and not configurable. A hashing
/// failure is surfaced to the caller and never retried.
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::Store(DbErr::Custom(format!("password hashing failed: {e}"))))
}

/// Checks a plaintext password against a stored digest.
///
/// Returns false for a mismatch and for an unparseable digest; verification
/// itself never errors.
pub fn verify_password(password: &str, digest: &str) -> bool {
    let parsed = match PasswordHash::new(digest) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
