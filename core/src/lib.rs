//! rncryptor-core
//!
//! Pure Rust implementation of the RNCryptor data format: a self-describing
//! envelope combining PBKDF2 key derivation, AES-256 (CBC or the schema 0
//! counter mode) and HMAC authentication.
//! No I/O beyond the OS entropy source.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Format layers
pub mod schema;
pub mod crypto;
pub mod envelope;

// Orchestration
pub mod cryptor;

pub use cryptor::{decrypt, encrypt, encrypt_with_schema, CryptorConfig, Decryptor, Encryptor};
pub use envelope::Envelope;
pub use schema::SchemaVersion;
pub use types::{CryptorError, ErrorKind};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::cryptor::{decrypt, encrypt, encrypt_with_schema, Decryptor, Encryptor};
    pub use crate::schema::SchemaVersion;
    pub use crate::types::{CryptorError, ErrorKind};
}
