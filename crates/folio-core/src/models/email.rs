//! Email normalization.
//!
//! Every lookup and write goes through [`normalize`] so uniqueness checks
//! are case-insensitive: `A@X.com` and `a@x.com` name the same account.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Lowercase and trim an email address.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Minimal shape check on an already-normalized address. Full RFC parsing is
/// the transport adapter's concern; this only rejects input that can never
/// be an address.
#[track_caller]
pub fn validate(normalized: &str) -> CoreErrorResult<()> {
    let valid = match normalized.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !normalized.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation {
            message: format!("Invalid email address: '{normalized}'"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
