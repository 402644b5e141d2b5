//! cryptor/mod.rs
//! Encrypt/decrypt orchestration and the stable free-function API.

pub mod config;
pub mod encrypt;
pub mod decrypt;

pub use config::*;
pub use encrypt::*;
pub use decrypt::*;

use crate::schema::SchemaVersion;
use crate::types::CryptorError;

/// Encrypt `plaintext` under `password` with the latest schema.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<String, CryptorError> {
    Encryptor::new().encrypt(plaintext, password)
}

/// Encrypt `plaintext` under `password` with an explicit schema.
pub fn encrypt_with_schema(
    plaintext: &[u8],
    password: &str,
    schema: SchemaVersion,
) -> Result<String, CryptorError> {
    Encryptor::new().encrypt_with_schema(plaintext, password, schema)
}

/// Decrypt base-64 envelope text produced by any RNCryptor implementation.
pub fn decrypt(encoded: &str, password: &str) -> Result<Vec<u8>, CryptorError> {
    Decryptor::new().decrypt(encoded, password)
}
