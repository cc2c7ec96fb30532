pub mod clock;
pub mod error;
pub mod models;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, Result};
pub use models::audit_action::AuditAction;
pub use models::audit_event::AuditEvent;
pub use models::email;
pub use models::identity::Identity;
pub use models::request_context::RequestContext;
pub use models::user_settings::UserSettings;

#[cfg(test)]
mod tests;
