pub mod claims;
pub mod error;
pub mod password;
pub mod token_codec;
pub mod token_purpose;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::PasswordHasher;
pub use token_codec::{TokenCodec, TokenSecrets, TokenTtls};
pub use token_purpose::TokenPurpose;
