//! envelope/mod.rs
//! Binary layout of an RNCryptor envelope.
//!
//! | field           | bytes |
//! |-----------------|-------|
//! | schema          | 1     |
//! | options         | 1     |
//! | encryption salt | 8     |
//! | HMAC salt       | 8     |
//! | IV              | 16    |
//! | ciphertext      | n     |
//! | HMAC            | 32    |
//!
//! The header is always 34 bytes, so the smallest envelope is 66 bytes.
//! No integer fields, so no endianness concerns.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
