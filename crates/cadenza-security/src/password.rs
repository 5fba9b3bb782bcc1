//! Password hashing using Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};
use cadenza_core::{CatalogError, CatalogResult};
use tracing::debug;

/// Password hasher using Argon2id with the library defaults.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Creates a new password hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a password with a fresh random salt.
    pub fn hash(&self, password: &str) -> CatalogResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CatalogError::Internal(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verifies a password against a stored hash.
    ///
    /// A mismatching password returns `Ok(false)`; only a malformed hash or
    /// a hasher fault is an error.
    pub fn verify(&self, password: &str, hash: &str) -> CatalogResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| CatalogError::Internal(format!("Invalid password hash format: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                Ok(false)
            }
            Err(e) => Err(CatalogError::Internal(format!(
                "Password verification error: {}",
                e
            ))),
        }
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("s3cret-passphrase").unwrap();

        assert_ne!(hash, "s3cret-passphrase");
        assert!(hasher.verify("s3cret-passphrase", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("correct").unwrap();

        assert!(!hasher.verify("incorrect", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("whatever", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("same-password").unwrap();
        let second = hasher.hash("same-password").unwrap();
        assert_ne!(first, second);
    }
}
