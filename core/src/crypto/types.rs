// ## 📂 File: `src/crypto/types.rs`

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::KEY_LEN_32;

/// 32-byte key produced by PBKDF2. Recomputed per operation, wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LEN_32]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_LEN_32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN_32] {
        &self.0
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid key length provided to cipher or MAC.
    InvalidKeyLen { expected: usize, actual: usize },

    /// CBC plaintext padding did not validate.
    InvalidPadding,

    /// HMAC tag mismatch (wrong password or modified data).
    TagMismatch,

    /// Entropy source failed to produce bytes.
    RandomSource(String),

    /// General runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidPadding =>
                write!(f, "invalid PKCS#7 padding"),
            TagMismatch =>
                write!(f, "HMAC tag mismatch"),
            RandomSource(msg) =>
                write!(f, "random source failure: {}", msg),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
