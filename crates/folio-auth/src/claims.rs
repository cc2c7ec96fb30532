use crate::{AuthError, Result as AuthErrorResult, TokenPurpose};

use std::collections::HashMap;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed token payload. Tokens are stateless and self-describing: validity
/// is derived entirely from the signature, `exp`, and the embedded purpose.
/// Nothing here is ever persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,
    pub purpose: TokenPurpose,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Purpose-specific snapshot data, e.g. the email at issuance time for
    /// reset and verification tokens.
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

impl Claims {
    /// Parse the subject as an identity id.
    #[track_caller]
    pub fn subject(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::MalformedToken {
            message: format!("Invalid subject '{}': {}", self.sub, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Email snapshot taken at issuance, if the purpose carries one.
    pub fn email(&self) -> Option<&str> {
        self.extra.get("email").map(String::as_str)
    }
}
