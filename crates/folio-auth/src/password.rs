//! One-way salted password hashing (bcrypt).

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Default bcrypt cost. Roughly 250ms per hash on current hardware; the
/// throughput hit is the point.
pub const DEFAULT_COST: u32 = 12;

/// Minimum cost bcrypt itself accepts. Only test builds should go this low.
pub const MIN_COST: u32 = 4;

/// Salted one-way hashing with a work factor fixed at construction.
/// Verification is constant-time; a mismatch is a normal `Ok(false)`, not an
/// error.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Hasher with a reduced work factor, for test suites that hash many
    /// passwords. Clamped to the bcrypt minimum.
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost: cost.max(MIN_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produce a self-salted digest of `plaintext`.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| AuthError::Hashing {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check `plaintext` against a stored digest. Fails only on a malformed
    /// stored hash (corrupt data); a wrong password is `Ok(false)`.
    #[track_caller]
    pub fn verify(&self, plaintext: &str, stored: &str) -> AuthErrorResult<bool> {
        bcrypt::verify(plaintext, stored).map_err(|e| AuthError::CorruptHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
