//! Identity entity - the persisted user/account record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. The email is stored normalized (lowercased,
/// trimmed) and is globally unique; the store enforces uniqueness, callers
/// are expected to normalize before any lookup or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    /// One-way salted digest of the password. Never serialized to clients;
    /// defaults to empty when absent on the way back in.
    #[serde(skip_serializing, default)]
    pub credential_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Create a new identity with default flags. `email` must already be
    /// normalized.
    pub fn new(
        email: String,
        credential_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            credential_hash,
            first_name,
            last_name,
            is_active: true,
            email_verified: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Record a successful login.
    pub fn mark_logged_in(&mut self, now: DateTime<Utc>) {
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Replace the stored credential digest.
    pub fn set_credential_hash(&mut self, hash: String, now: DateTime<Utc>) {
        self.credential_hash = hash;
        self.updated_at = now;
    }

    /// Change the email address. The new address needs re-verification.
    /// `email` must already be normalized.
    pub fn change_email(&mut self, email: String, now: DateTime<Utc>) {
        self.email = email;
        self.email_verified = false;
        self.updated_at = now;
    }

    /// Mark the current email address as verified.
    pub fn mark_email_verified(&mut self, now: DateTime<Utc>) {
        self.email_verified = true;
        self.updated_at = now;
    }
}
