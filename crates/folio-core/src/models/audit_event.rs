//! Immutable record of a security-relevant action.
//!
//! Events are created once and appended to the audit trail; nothing in the
//! core updates or deletes them afterwards.

use crate::{AuditAction, RequestContext};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: AuditAction,
    pub resource_type: Option<String>,
    pub resource_id: Option<Uuid>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub metadata: Option<HashMap<String, String>>,
    pub created_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Event for an action a user performed on their own account record.
    pub fn for_user(
        action: AuditAction,
        user_id: Uuid,
        ctx: &RequestContext,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            action,
            resource_type: Some("users".to_string()),
            resource_id: Some(user_id),
            ip_address: ctx.ip_address.clone(),
            user_agent: ctx.user_agent.clone(),
            metadata: None,
            created_at: now,
        }
    }
}
