//! Token delivery side-channel.
//!
//! Email delivery is out of scope for the core: reset and verification
//! tokens are handed to a [`Notifier`] and forgotten. Dispatch failures are
//! logged by the caller but never propagate to the user-facing operation.

use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Notification dispatch failed: {message} {location}")]
pub struct NotifierError {
    pub message: String,
    pub location: ErrorLocation,
}

impl NotifierError {
    #[track_caller]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_reset_link(&self, email: &str, token: &str) -> Result<(), NotifierError>;

    async fn send_verification_link(&self, email: &str, token: &str) -> Result<(), NotifierError>;
}

/// Development stub that logs the links instead of sending mail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_reset_link(&self, email: &str, token: &str) -> Result<(), NotifierError> {
        info!("Password reset token for {email}: {token}");
        Ok(())
    }

    async fn send_verification_link(&self, email: &str, token: &str) -> Result<(), NotifierError> {
        info!("Email verification token for {email}: {token}");
        Ok(())
    }
}

/// Captures dispatched links so tests can redeem the tokens.
#[derive(Default)]
pub struct RecordingNotifier {
    reset_links: Mutex<Vec<(String, String)>>,
    verification_links: Mutex<Vec<(String, String)>>,
    fail_sends: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// `(email, token)` pairs in dispatch order.
    pub fn reset_links(&self) -> Vec<(String, String)> {
        self.reset_links.lock().expect("notifier poisoned").clone()
    }

    pub fn verification_links(&self) -> Vec<(String, String)> {
        self.verification_links
            .lock()
            .expect("notifier poisoned")
            .clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_reset_link(&self, email: &str, token: &str) -> Result<(), NotifierError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(NotifierError::new("delivery channel down"));
        }
        let mut links = self.reset_links.lock().expect("notifier poisoned");
        links.push((email.to_string(), token.to_string()));
        Ok(())
    }

    async fn send_verification_link(&self, email: &str, token: &str) -> Result<(), NotifierError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(NotifierError::new("delivery channel down"));
        }
        let mut links = self.verification_links.lock().expect("notifier poisoned");
        links.push((email.to_string(), token.to_string()));
        Ok(())
    }
}
