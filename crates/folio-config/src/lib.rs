mod audit_config;
mod config;
mod error;
mod token_config;

pub use audit_config::AuditConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use token_config::TokenConfig;

const DEFAULT_ACCESS_TTL_SECS: i64 = 900;
const DEFAULT_REFRESH_TTL_SECS: i64 = 604_800;
const DEFAULT_PASSWORD_RESET_TTL_SECS: i64 = 3_600;
const DEFAULT_EMAIL_VERIFICATION_TTL_SECS: i64 = 86_400;
const DEFAULT_AUDIT_FAIL_OPEN: bool = true;
const MIN_SECRET_BYTES: usize = 32;

#[cfg(test)]
mod tests;
