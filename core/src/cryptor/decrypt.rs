// ## 📂 File: `src/cryptor/decrypt.rs`

//! cryptor/decrypt.rs
//! Decrypt pipeline: base-64 -> envelope -> HMAC check -> key -> cipher.
//!
//! Order matters: the tag is verified with the parsed configuration before
//! any decryption runs. On a mismatch nothing is decrypted.

use crate::crypto::{cipher, derive_key, verify_tag};
use crate::envelope::{parse, Envelope};
use crate::types::CryptorError;
use crate::utils::decode_base64;

/// Stateless decryptor. The configuration for each call comes from the
/// envelope's own schema byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decryptor;

impl Decryptor {
    pub fn new() -> Self {
        Self
    }

    /// Decode base-64 text and decrypt it.
    ///
    /// Errors:
    /// - `MalformedEncoding` for invalid base-64.
    /// - `TruncatedEnvelope` / `UnsupportedSchema` from parsing.
    /// - `AuthenticationFailure` for a wrong password or modified data.
    /// - `InvalidPadding` if CBC padding fails after authentication.
    pub fn decrypt(&self, encoded: &str, password: &str) -> Result<Vec<u8>, CryptorError> {
        let raw = decode_base64(encoded)?;
        self.decrypt_bytes(&raw, password)
    }

    /// Decrypt to UTF-8 text.
    pub fn decrypt_to_string(&self, encoded: &str, password: &str) -> Result<String, CryptorError> {
        let plaintext = self.decrypt(encoded, password)?;
        String::from_utf8(plaintext).map_err(|_| CryptorError::InvalidText)
    }

    /// Decrypt raw envelope bytes.
    pub fn decrypt_bytes(&self, raw: &[u8], password: &str) -> Result<Vec<u8>, CryptorError> {
        let envelope = parse(raw)?;
        self.open(&envelope, password)
    }

    /// Authenticate, then decrypt an already parsed envelope.
    pub fn open(&self, envelope: &Envelope, password: &str) -> Result<Vec<u8>, CryptorError> {
        let config = envelope.configuration();
        tracing::debug!(
            schema = envelope.schema.as_byte(),
            mode = ?config.aes_mode,
            ciphertext_len = envelope.ciphertext.len(),
            "decrypting envelope"
        );

        if let Err(e) = verify_tag(&config, envelope, password) {
            tracing::warn!(schema = envelope.schema.as_byte(), "envelope failed authentication");
            return Err(e.into());
        }

        let key = derive_key(password, &envelope.encryption_salt);
        let plaintext = cipher::decrypt(config.aes_mode, &key, &envelope.iv, &envelope.ciphertext)?;

        Ok(plaintext)
    }
}
