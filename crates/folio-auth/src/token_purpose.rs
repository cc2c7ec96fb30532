use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Tag distinguishing the four token families. Each purpose is signed with
/// its own secret, and the codec rejects a token whose embedded purpose does
/// not match what the caller expects, so a token from one family can never
/// be replayed as another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenPurpose {
    Access,
    Refresh,
    PasswordReset,
    EmailVerification,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
            Self::PasswordReset => "password-reset",
            Self::EmailVerification => "email-verification",
        }
    }
}

impl FromStr for TokenPurpose {
    type Err = AuthError;

    #[track_caller]
    fn from_str(s: &str) -> AuthErrorResult<Self> {
        match s {
            "access" => Ok(Self::Access),
            "refresh" => Ok(Self::Refresh),
            "password-reset" => Ok(Self::PasswordReset),
            "email-verification" => Ok(Self::EmailVerification),
            _ => Err(AuthError::UnknownPurpose {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
