//! Repository interfaces the auth core depends on.
//!
//! Persistence is an external collaborator: the core only sees these traits.
//! Any backing implementation must enforce the unique-email constraint
//! atomically at the storage boundary, not with a check-then-act gap.

use crate::Result as StoreResult;

use folio_core::{AuditEvent, Identity, UserSettings};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Lookup by normalized email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Identity>>;

    /// Insert a new identity. Fails with [`crate::StoreError::Conflict`]
    /// when the email is already taken, even under concurrent inserts.
    async fn insert(&self, identity: Identity) -> StoreResult<Identity>;

    /// Replace an existing identity record. Re-checks email uniqueness
    /// against other identities.
    async fn update(&self, identity: Identity) -> StoreResult<Identity>;
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Create the default settings row for a freshly registered user.
    async fn create_default(&self, user_id: Uuid) -> StoreResult<UserSettings>;
}

#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Append one event to the audit trail. Events are immutable once
    /// written.
    async fn append(&self, event: AuditEvent) -> StoreResult<()>;
}
