use crate::{Result as StoreResult, StoreError, traits::AuditSink};

use folio_core::AuditEvent;

use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Append-only in-memory audit trail. `set_fail_writes` simulates a
/// persistence outage so callers can exercise their degraded-mode handling.
#[derive(Default)]
pub struct InMemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
    fail_writes: AtomicBool,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of everything appended so far.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit log poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("audit log poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn append(&self, event: AuditEvent) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend {
                message: "audit sink unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut events = self.events.lock().expect("audit log poisoned");
        events.push(event);
        Ok(())
    }
}
