//! Audit trail recording with an explicit failure policy.

use crate::{Result as ServiceResult, ServiceError};

use folio_core::AuditEvent;
use folio_store::AuditSink;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::warn;

/// What to do when the audit sink cannot persist an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditWritePolicy {
    /// Log a warning and let the primary operation proceed. A security event
    /// that cannot be logged should not unauthenticate or unregister a user.
    FailOpen,
    /// Fail the primary operation.
    FailClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    Recorded,
    /// Fail-open mode swallowed a write failure; the trail has a gap.
    Degraded,
}

pub struct AuditRecorder {
    sink: Arc<dyn AuditSink>,
    policy: AuditWritePolicy,
}

impl AuditRecorder {
    pub fn new(sink: Arc<dyn AuditSink>, policy: AuditWritePolicy) -> Self {
        Self { sink, policy }
    }

    pub fn policy(&self) -> AuditWritePolicy {
        self.policy
    }

    /// Append one event. Under `FailOpen` a sink failure degrades to a
    /// warning; under `FailClosed` it propagates.
    pub async fn record(&self, event: AuditEvent) -> ServiceResult<AuditOutcome> {
        let action = event.action;
        match self.sink.append(event).await {
            Ok(()) => Ok(AuditOutcome::Recorded),
            Err(source) => match self.policy {
                AuditWritePolicy::FailOpen => {
                    warn!("Audit write for '{action}' failed, continuing: {source}");
                    Ok(AuditOutcome::Degraded)
                }
                AuditWritePolicy::FailClosed => Err(ServiceError::AuditUnavailable {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                }),
            },
        }
    }
}
