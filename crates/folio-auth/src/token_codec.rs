//! Signing and verification of time-bounded, purpose-tagged tokens.

use crate::{AuthError, Claims, Result as AuthErrorResult, TokenPurpose};

use folio_core::Clock;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// 15 minutes
pub const DEFAULT_ACCESS_TTL_SECS: i64 = 900;
/// 7 days
pub const DEFAULT_REFRESH_TTL_SECS: i64 = 604_800;
/// 1 hour
pub const DEFAULT_PASSWORD_RESET_TTL_SECS: i64 = 3_600;
/// 24 hours
pub const DEFAULT_EMAIL_VERIFICATION_TTL_SECS: i64 = 86_400;

/// Clock skew tolerance when checking expiry
const LEEWAY_SECS: i64 = 30;

/// One independent signing secret per token purpose, so a leak of the access
/// secret cannot forge password-reset tokens.
#[derive(Clone)]
pub struct TokenSecrets {
    pub access: String,
    pub refresh: String,
    pub password_reset: String,
    pub email_verification: String,
}

impl std::fmt::Debug for TokenSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Secret material stays out of logs and panic messages.
        f.debug_struct("TokenSecrets").finish_non_exhaustive()
    }
}

/// Validity window per purpose, in seconds.
#[derive(Debug, Clone, Copy)]
pub struct TokenTtls {
    pub access_secs: i64,
    pub refresh_secs: i64,
    pub password_reset_secs: i64,
    pub email_verification_secs: i64,
}

impl Default for TokenTtls {
    fn default() -> Self {
        Self {
            access_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_secs: DEFAULT_REFRESH_TTL_SECS,
            password_reset_secs: DEFAULT_PASSWORD_RESET_TTL_SECS,
            email_verification_secs: DEFAULT_EMAIL_VERIFICATION_TTL_SECS,
        }
    }
}

/// Stateless HS256 token codec. Issuance and parsing are pure computations
/// over the injected clock; nothing is stored server-side, so there is no
/// revocation before expiry.
pub struct TokenCodec {
    secrets: TokenSecrets,
    ttls: TokenTtls,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(secrets: TokenSecrets, ttls: TokenTtls, clock: Arc<dyn Clock>) -> Self {
        Self {
            secrets,
            ttls,
            clock,
        }
    }

    fn secret_for(&self, purpose: TokenPurpose) -> &[u8] {
        match purpose {
            TokenPurpose::Access => self.secrets.access.as_bytes(),
            TokenPurpose::Refresh => self.secrets.refresh.as_bytes(),
            TokenPurpose::PasswordReset => self.secrets.password_reset.as_bytes(),
            TokenPurpose::EmailVerification => self.secrets.email_verification.as_bytes(),
        }
    }

    /// Configured TTL for a purpose, in seconds.
    pub fn ttl_secs(&self, purpose: TokenPurpose) -> i64 {
        match purpose {
            TokenPurpose::Access => self.ttls.access_secs,
            TokenPurpose::Refresh => self.ttls.refresh_secs,
            TokenPurpose::PasswordReset => self.ttls.password_reset_secs,
            TokenPurpose::EmailVerification => self.ttls.email_verification_secs,
        }
    }

    /// Sign a token for `subject` with the purpose's secret and configured
    /// TTL. `extra` carries purpose-specific snapshot data (e.g. the email
    /// at issuance time).
    #[track_caller]
    pub fn issue(
        &self,
        purpose: TokenPurpose,
        subject: Uuid,
        extra: HashMap<String, String>,
    ) -> AuthErrorResult<String> {
        let now = self.clock.now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            purpose,
            iat: now,
            exp: now + self.ttl_secs(purpose),
            extra,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_for(purpose)),
        )
        .map_err(|e| AuthError::TokenEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Verify signature and expiry with the secret for `expected` and return
    /// the claims. Fails closed when the embedded purpose does not match
    /// `expected`, even if the signature happens to verify.
    ///
    /// Expiry is checked against the injected clock (with a small leeway),
    /// not the process wall clock.
    #[track_caller]
    pub fn parse(&self, token: &str, expected: TokenPurpose) -> AuthErrorResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the injected clock.
        validation.validate_exp = false;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_for(expected)),
            &validation,
        )
        .map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::InvalidSignature => AuthError::BadSignature {
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::malformed(e.to_string()),
            }
        })?;

        let claims = token_data.claims;

        if claims.purpose != expected {
            return Err(AuthError::WrongPurpose {
                expected,
                actual: claims.purpose,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.clock.now().timestamp() >= claims.exp + LEEWAY_SECS {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }
}
