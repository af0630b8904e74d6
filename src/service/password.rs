//! Password hashing with Argon2id, stored as a PHC string.

use crate::error::AppError;
use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;

/// Runs on the blocking pool; hashing takes tens of milliseconds.
pub async fn hash_password(plain: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Hash(e.to_string()))
    })
    .await
    .map_err(|e| AppError::Hash(e.to_string()))?
}
