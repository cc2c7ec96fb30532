use folio_auth::AuthError;
use folio_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// User-facing error taxonomy. Internal collaborator errors (hashing, token
/// codec, storage backend) are never leaked raw; they surface as the nearest
/// kind here, with `Internal` for genuine server faults.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{message}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Audit trail unavailable while running fail-closed.
    #[error("Audit trail unavailable: {source} {location}")]
    AuditUnavailable {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message a transport adapter should show to the caller.
    pub fn message(&self) -> &str {
        match self {
            Self::Conflict { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. }
            | Self::BadRequest { message, .. }
            | Self::Internal { message, .. } => message,
            Self::AuditUnavailable { .. } => "Audit trail unavailable",
        }
    }
}

impl From<StoreError> for ServiceError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        match source {
            StoreError::Conflict { .. } => Self::Conflict {
                message: "Email is already in use".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::NotFound { .. } => Self::NotFound {
                message: "User not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Backend { .. } => Self::Internal {
                message: source.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Internal {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
