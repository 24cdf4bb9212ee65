//! How the password field is turned into the value stored in `user.password`.

use crate::errors::{AppError, AppResult};
use sha2::{Digest, Sha256};

pub trait PasswordEncoder {
    /// Name used in the `password_storage` config key.
    fn name(&self) -> &'static str;

    fn encode(&self, raw: &str) -> String;
}

/// Lowercase hex SHA-256 digest of the raw password.
pub struct Sha256Encoder;

impl PasswordEncoder for Sha256Encoder {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn encode(&self, raw: &str) -> String {
        hex::encode(Sha256::digest(raw.as_bytes()))
    }
}

/// Stores the password as typed. Only for databases shared with older tools.
pub struct PlaintextEncoder;

impl PasswordEncoder for PlaintextEncoder {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn encode(&self, raw: &str) -> String {
        raw.to_string()
    }
}

pub fn encoder_for(name: &str) -> AppResult<Box<dyn PasswordEncoder>> {
    match name {
        "sha256" => Ok(Box::new(Sha256Encoder)),
        "plaintext" => Ok(Box::new(PlaintextEncoder)),
        other => Err(AppError::Config(format!(
            "unknown password_storage '{}'",
            other
        ))),
    }
}
