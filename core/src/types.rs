use thiserror::Error;

use crate::crypto::CryptoError;
use crate::envelope::EnvelopeError;
use crate::schema::SchemaError;

/// Unified error for the public encrypt/decrypt surface.
/// - Variants map one-to-one onto the failure kinds callers can observe.
/// - `From<T>` impls let `?` flow from the schema, envelope and crypto layers.
/// - `public_message()` gives a single outward string for every decrypt-side
///   failure, so a UI never reveals which check tripped.
#[derive(Debug, Error)]
pub enum CryptorError {
    /// Schema byte outside {0, 1, 2, 3}.
    #[error("unsupported schema version: 0x{raw:02x}")]
    UnsupportedSchema { raw: u8 },

    /// Input text is not valid padded base-64.
    #[error("malformed base64 envelope: {0}")]
    MalformedEncoding(String),

    /// Decoded buffer shorter than header + tag.
    #[error("envelope truncated: {have} < {need}")]
    TruncatedEnvelope { have: usize, need: usize },

    /// HMAC mismatch. Wrong password and tampering are not told apart.
    #[error("authentication failed")]
    AuthenticationFailure,

    /// CBC padding invalid after a successful HMAC check.
    #[error("invalid padding")]
    InvalidPadding,

    /// Plaintext requested as text but is not UTF-8.
    #[error("plaintext is not valid UTF-8")]
    InvalidText,

    /// OS entropy source failed. Not recoverable by retrying the call.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// Primitive misuse (key or IV length). Unreachable with well-formed input.
    #[error("crypto error: {0}")]
    Crypto(CryptoError),
}

/// Payload-free classification of `CryptorError`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedSchema,
    MalformedEncoding,
    TruncatedEnvelope,
    AuthenticationFailure,
    InvalidPadding,
    InvalidText,
    RandomSource,
    Crypto,
}

impl CryptorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptorError::UnsupportedSchema { .. } => ErrorKind::UnsupportedSchema,
            CryptorError::MalformedEncoding(_) => ErrorKind::MalformedEncoding,
            CryptorError::TruncatedEnvelope { .. } => ErrorKind::TruncatedEnvelope,
            CryptorError::AuthenticationFailure => ErrorKind::AuthenticationFailure,
            CryptorError::InvalidPadding => ErrorKind::InvalidPadding,
            CryptorError::InvalidText => ErrorKind::InvalidText,
            CryptorError::RandomSource(_) => ErrorKind::RandomSource,
            CryptorError::Crypto(_) => ErrorKind::Crypto,
        }
    }

    /// Message safe to show outside the process. Decrypt-side failures all
    /// collapse to the same text.
    pub fn public_message(&self) -> &'static str {
        match self {
            CryptorError::RandomSource(_) => "encryption failed",
            _ => "decryption failed",
        }
    }
}

impl From<SchemaError> for CryptorError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::UnsupportedSchema { raw } => CryptorError::UnsupportedSchema { raw },
        }
    }
}

impl From<EnvelopeError> for CryptorError {
    fn from(e: EnvelopeError) -> Self {
        match e {
            EnvelopeError::UnsupportedSchema { raw } => CryptorError::UnsupportedSchema { raw },
            EnvelopeError::Truncated { have, need } => CryptorError::TruncatedEnvelope { have, need },
            other => CryptorError::Crypto(CryptoError::Failure(other.to_string())),
        }
    }
}

impl From<CryptoError> for CryptorError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::TagMismatch => CryptorError::AuthenticationFailure,
            CryptoError::InvalidPadding => CryptorError::InvalidPadding,
            CryptoError::RandomSource(msg) => CryptorError::RandomSource(msg),
            other => CryptorError::Crypto(other),
        }
    }
}

impl From<base64::DecodeError> for CryptorError {
    fn from(e: base64::DecodeError) -> Self {
        CryptorError::MalformedEncoding(e.to_string())
    }
}
