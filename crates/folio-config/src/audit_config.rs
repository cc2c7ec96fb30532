use crate::DEFAULT_AUDIT_FAIL_OPEN;

use serde::Deserialize;

/// Policy for audit-trail write failures.
///
/// `fail_open = true` (default): a security event that cannot be persisted
/// is logged as a warning and the primary operation proceeds.
/// `fail_open = false`: the operation fails instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub fail_open: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            fail_open: DEFAULT_AUDIT_FAIL_OPEN,
        }
    }
}
