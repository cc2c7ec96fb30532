use crate::TokenPurpose;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored credential hash is malformed: {message} {location}")]
    CorruptHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token signature verification failed {location}")]
    BadSignature { location: ErrorLocation },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token purpose mismatch: expected {expected}, got {actual} {location}")]
    WrongPurpose {
        expected: TokenPurpose,
        actual: TokenPurpose,
        location: ErrorLocation,
    },

    #[error("Token encoding failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Unknown token purpose: {value} {location}")]
    UnknownPurpose {
        value: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// True for any of the token parse failures (expired, bad signature,
    /// malformed, wrong purpose). Callers collapse these into one
    /// user-facing message.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            Self::TokenExpired { .. }
                | Self::BadSignature { .. }
                | Self::MalformedToken { .. }
                | Self::WrongPurpose { .. }
        )
    }

    #[track_caller]
    pub(crate) fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
