// ## 📂 File: `src/envelope/types.rs`

//! envelope/types.rs
//! Parsed envelope value and its errors.

use std::fmt;

use crate::constants::{HEADER_LEN, HMAC_LEN, IV_LEN, SALT_LEN};
use crate::schema::{configuration_for, Configuration, SchemaError, SchemaVersion};
use crate::utils::enum_name_or_hex;

/// One envelope, either freshly built by an encrypt call or parsed for a
/// decrypt call. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub schema: SchemaVersion,
    /// Echo of the configuration's options byte (as read, when parsed).
    pub options: u8,
    pub encryption_salt: [u8; SALT_LEN],
    pub hmac_salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
    pub hmac: [u8; HMAC_LEN],
}

impl Envelope {
    pub const HEADER_LEN: usize = HEADER_LEN;

    /// Configuration implied by the schema byte.
    pub fn configuration(&self) -> Configuration {
        configuration_for(self.schema)
    }

    /// Encoded length: header + ciphertext + tag.
    pub fn total_len(&self) -> usize {
        HEADER_LEN + self.ciphertext.len() + HMAC_LEN
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Schema byte outside the registry.
    UnsupportedSchema { raw: u8 },

    /// Buffer too short to hold header and tag.
    Truncated { have: usize, need: usize },

    /// Tag length does not fit the fixed HMAC field.
    InvalidTagLen { have: usize, need: usize },
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EnvelopeError::*;
        match self {
            UnsupportedSchema { raw } =>
                write!(f, "unsupported schema version: {}",
                       enum_name_or_hex::<SchemaVersion>(*raw)),
            Truncated { have, need } =>
                write!(f, "envelope truncated: {} < {}", have, need),
            InvalidTagLen { have, need } =>
                write!(f, "invalid HMAC length: {} != {}", have, need),
        }
    }
}

impl std::error::Error for EnvelopeError {}

impl From<SchemaError> for EnvelopeError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::UnsupportedSchema { raw } => EnvelopeError::UnsupportedSchema { raw },
        }
    }
}
