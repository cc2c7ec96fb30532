pub mod audit;
pub mod error;
pub mod notifier;
pub mod service;

pub use audit::{AuditOutcome, AuditRecorder, AuditWritePolicy};
pub use error::{Result, ServiceError};
pub use notifier::{LogNotifier, Notifier, NotifierError, RecordingNotifier};
pub use service::{AuthResponse, AuthService, AuthTokens, NewRegistration, ProfileUpdate};

#[cfg(test)]
mod tests;
