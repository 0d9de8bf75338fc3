// bcrypt is CPU bound, so both directions run on the blocking pool

use bcrypt::{hash, verify};

use super::AuthError;

pub async fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || {
        hash(password, cost).map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || {
        verify(password, &hash).map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
}
