pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::audit_sink::InMemoryAuditSink;
pub use memory::identity_store::InMemoryIdentityStore;
pub use memory::settings_store::InMemorySettingsStore;
pub use traits::{AuditSink, IdentityStore, SettingsStore};
