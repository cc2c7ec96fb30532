use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TTL_SECS, DEFAULT_EMAIL_VERIFICATION_TTL_SECS,
    DEFAULT_PASSWORD_RESET_TTL_SECS, DEFAULT_REFRESH_TTL_SECS, MIN_SECRET_BYTES,
};

use serde::Deserialize;

/// Signing secrets and validity windows for the four token purposes.
///
/// Secrets default to empty and are expected to arrive via `FOLIO_*`
/// environment variables rather than the TOML file; `validate()` refuses to
/// start with a missing or short secret.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub password_reset_secret: String,
    pub email_verification_secret: String,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
    pub password_reset_ttl_secs: i64,
    pub email_verification_ttl_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            access_secret: String::new(),
            refresh_secret: String::new(),
            password_reset_secret: String::new(),
            email_verification_secret: String::new(),
            access_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
            password_reset_ttl_secs: DEFAULT_PASSWORD_RESET_TTL_SECS,
            email_verification_ttl_secs: DEFAULT_EMAIL_VERIFICATION_TTL_SECS,
        }
    }
}

impl TokenConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secrets = [
            ("access_secret", &self.access_secret),
            ("refresh_secret", &self.refresh_secret),
            ("password_reset_secret", &self.password_reset_secret),
            (
                "email_verification_secret",
                &self.email_verification_secret,
            ),
        ];

        for (name, secret) in secrets {
            if secret.len() < MIN_SECRET_BYTES {
                return Err(ConfigError::token(format!(
                    "token.{name} must be at least {MIN_SECRET_BYTES} bytes"
                )));
            }
        }

        let ttls = [
            ("access_ttl_secs", self.access_ttl_secs),
            ("refresh_ttl_secs", self.refresh_ttl_secs),
            ("password_reset_ttl_secs", self.password_reset_ttl_secs),
            (
                "email_verification_ttl_secs",
                self.email_verification_ttl_secs,
            ),
        ];

        for (name, ttl) in ttls {
            if ttl <= 0 {
                return Err(ConfigError::token(format!(
                    "token.{name} must be positive"
                )));
            }
        }

        Ok(())
    }
}
