//! # Password Hashing
//!
//! Argon2id hashing for stored credentials, using the PHC string format
//! (salt and parameters travel inside the hash string).
//!
//! This intentionally upgrades the legacy scheme this store replaces, which
//! hashed passwords with a single unsalted digest round. A fresh database
//! has no legacy hashes to stay compatible with, so there is no fallback
//! verification path.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{StoreError, StoreResult};

/// Hashes a plaintext password for storage.
///
/// Each call generates a fresh random salt, so hashing the same password
/// twice yields different strings.
pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// Returns `false` for a mismatch or an unparseable hash; neither case is
/// an error from the caller's point of view (it is simply "no match").
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("secret").unwrap();
        assert!(verify_password("secret", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("secret").unwrap();
        let b = hash_password("secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_does_not_verify() {
        assert!(!verify_password("secret", "not-a-phc-string"));
        assert!(!verify_password("secret", ""));
    }
}
