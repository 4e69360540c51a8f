//! Password hashing using bcrypt.

use roster_core::{Interface, RosterError, RosterResult};
use shaku::Component;
use tracing::debug;

/// Work factor applied when the configuration does not override it.
pub const DEFAULT_COST: u32 = 12;

/// Interface for password hashing operations.
///
/// This trait abstracts password hashing functionality for dependency injection.
pub trait PasswordHasherInterface: Interface + Send + Sync {
    /// Hashes a password.
    fn hash(&self, password: &str) -> RosterResult<String>;

    /// Verifies a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> RosterResult<bool>;
}

/// Password hasher service using bcrypt.
#[derive(Component, Clone)]
#[shaku(interface = PasswordHasherInterface)]
pub struct PasswordHasher {
    #[shaku(default = DEFAULT_COST)]
    cost: u32,
}

impl PasswordHasher {
    /// Creates a new password hasher with the default work factor.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_COST)
    }

    /// Creates a new password hasher with the given bcrypt work factor.
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Returns the configured work factor.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    fn hash_inner(&self, password: &str) -> RosterResult<String> {
        let hash = bcrypt::hash(password, self.cost)
            .map_err(|e| RosterError::Hashing(format!("Failed to hash password: {}", e)))?;

        debug!("Password hashed successfully");
        Ok(hash)
    }

    fn verify_inner(&self, password: &str, hash: &str) -> RosterResult<bool> {
        match bcrypt::verify(password, hash) {
            Ok(matches) => {
                debug!(matches, "Password verification completed");
                Ok(matches)
            }
            Err(e) => Err(RosterError::Hashing(format!(
                "Password verification error: {}",
                e
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherInterface for PasswordHasher {
    fn hash(&self, password: &str) -> RosterResult<String> {
        self.hash_inner(password)
    }

    fn verify(&self, password: &str, hash: &str) -> RosterResult<bool> {
        self.verify_inner(password, hash)
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal cost for test speed; production cost comes from config.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::with_cost(TEST_COST);
        let password = "secret";

        let hash = hasher.hash(password).unwrap();
        assert_ne!(hash, password);
        assert!(hasher.verify(password, &hash).unwrap());
        assert!(!hasher.verify("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes() {
        let hasher = PasswordHasher::with_cost(TEST_COST);
        let password = "secret";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Same password should produce different hashes (different salts)
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(hasher.verify(password, &hash1).unwrap());
        assert!(hasher.verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_invalid_hash_format_returns_error() {
        let hasher = PasswordHasher::with_cost(TEST_COST);
        let result = hasher.verify("password", "not-a-valid-hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_cost_is_twelve() {
        let hasher = PasswordHasher::new();
        assert_eq!(hasher.cost(), 12);
    }

    #[test]
    fn test_invalid_cost_fails_to_hash() {
        // bcrypt rejects work factors outside 4..=31
        let hasher = PasswordHasher::with_cost(99);
        assert!(hasher.hash("password").is_err());
    }

    #[test]
    fn test_hasher_debug_does_not_leak_secrets() {
        let hasher = PasswordHasher::with_cost(TEST_COST);
        let debug_str = format!("{:?}", hasher);
        assert!(debug_str.contains("PasswordHasher"));
        assert!(debug_str.contains("cost"));
    }
}
