//! Per-user preference record, created with defaults at registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub id: Uuid,
    pub user_id: Uuid,
    /// ISO 4217 code
    pub currency: String,
    pub timezone: String,
    pub notification_email: bool,
    pub notification_portfolio_changes: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    /// Default settings for a freshly registered user.
    pub fn default_for(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            currency: "USD".to_string(),
            timezone: "America/New_York".to_string(),
            notification_email: true,
            notification_portfolio_changes: true,
            created_at: now,
            updated_at: now,
        }
    }
}
