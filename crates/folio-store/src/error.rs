use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Unique-email constraint violation. The store is the final authority
    /// for duplicates; the service-level pre-check only improves the error
    /// message under non-racy conditions.
    #[error("Email already in use: {email} {location}")]
    Conflict {
        email: String,
        location: ErrorLocation,
    },

    #[error("Identity not found: {id} {location}")]
    NotFound { id: Uuid, location: ErrorLocation },

    #[error("Storage backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
