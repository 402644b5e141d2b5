//! schema/mod.rs
//! Schema version registry.
//!
//! The first envelope byte selects a fixed configuration: cipher mode,
//! options byte, HMAC scope, HMAC padding and HMAC algorithm. Resolution is a
//! pure lookup; the resulting `Configuration` is a value threaded through each
//! call, never stored on an encryptor.

pub mod types;
pub mod registry;

pub use types::*;
pub use registry::*;
