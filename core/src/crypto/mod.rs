//! crypto/mod.rs
//! Primitives behind the envelope: PBKDF2 keys, AES transforms, HMAC
//! authentication and random material.

pub mod types;
pub mod kdf;
pub mod cipher;
pub mod auth;
pub mod random;

pub use types::*;
pub use kdf::*;
pub use auth::*;
pub use random::*;
