use crate::{AuditConfig, ConfigError, ConfigErrorResult, TokenConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub token: TokenConfig,
    pub audit: AuditConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for FOLIO_CONFIG_DIR env var, else use ./.folio/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply FOLIO_* environment variable overrides (secrets live here)
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("FOLIO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".folio"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.token.validate()
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  token ttls: access={}s refresh={}s reset={}s verification={}s",
            self.token.access_ttl_secs,
            self.token.refresh_ttl_secs,
            self.token.password_reset_ttl_secs,
            self.token.email_verification_ttl_secs
        );
        info!(
            "  token secrets: access={} refresh={} reset={} verification={}",
            secret_state(&self.token.access_secret),
            secret_state(&self.token.refresh_secret),
            secret_state(&self.token.password_reset_secret),
            secret_state(&self.token.email_verification_secret)
        );
        info!(
            "  audit: {}",
            if self.audit.fail_open {
                "fail-open"
            } else {
                "fail-closed"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var("FOLIO_ACCESS_TOKEN_SECRET") {
            self.token.access_secret = secret;
        }
        if let Ok(secret) = std::env::var("FOLIO_REFRESH_TOKEN_SECRET") {
            self.token.refresh_secret = secret;
        }
        if let Ok(secret) = std::env::var("FOLIO_PASSWORD_RESET_SECRET") {
            self.token.password_reset_secret = secret;
        }
        if let Ok(secret) = std::env::var("FOLIO_EMAIL_VERIFICATION_SECRET") {
            self.token.email_verification_secret = secret;
        }
        if let Ok(value) = std::env::var("FOLIO_AUDIT_FAIL_OPEN") {
            match value.parse::<bool>() {
                Ok(fail_open) => self.audit.fail_open = fail_open,
                Err(_) => log::warn!(
                    "Ignoring FOLIO_AUDIT_FAIL_OPEN='{value}': expected 'true' or 'false'"
                ),
            }
        }
    }
}

fn secret_state(secret: &str) -> &'static str {
    if secret.is_empty() { "unset" } else { "set" }
}
