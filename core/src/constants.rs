//! constants.rs
//! Wire constants for the RNCryptor envelope.
//!
//! Every length here is part of the interoperability contract. Changing any
//! of them produces envelopes no other implementation can read.

/// Salt length for both the encryption and the HMAC key (bytes).
pub const SALT_LEN: usize = 8;

/// IV / counter seed length, equal to the AES block size (bytes).
pub const IV_LEN: usize = 16;

/// AES block size (bytes).
pub const AES_BLOCK_LEN: usize = 16;

/// Derived key length: AES-256 and HMAC keys alike (bytes).
pub const KEY_LEN_32: usize = 32;

/// PBKDF2 iteration count. Fixed by the format.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Trailing HMAC field length (bytes). SHA-1 tags are zero-padded up to it.
pub const HMAC_LEN: usize = 32;

/// schema(1) + options(1) + encryption salt + HMAC salt + IV.
pub const HEADER_LEN: usize = 1 + 1 + SALT_LEN + SALT_LEN + IV_LEN;

/// Header plus tag with an empty ciphertext.
pub const MIN_ENVELOPE_LEN: usize = HEADER_LEN + HMAC_LEN;

/// Schema byte values (first byte of every envelope).
pub mod schema_ids {
    pub const V0: u8 = 0x00;
    pub const V1: u8 = 0x01;
    pub const V2: u8 = 0x02;
    pub const V3: u8 = 0x03;
}

/// Options byte values (second byte of every envelope).
pub mod options_ids {
    pub const V0: u8 = 0x00;
    pub const V1: u8 = 0x01;
}
