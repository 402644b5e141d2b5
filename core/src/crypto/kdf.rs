// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! PBKDF2-HMAC-SHA1 key derivation.
//!
//! Design:
//! - One key per salt: the envelope carries an encryption salt and an HMAC
//!   salt, each stretched independently from the same password.
//! - 10,000 iterations, 32-byte output. Both are fixed by the format and must
//!   not be tuned, or envelopes stop decrypting elsewhere.
//! - Deterministic: same (password, salt) -> same key. Decryption relies on it.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroize;

use crate::constants::{KEY_LEN_32, PBKDF2_ITERATIONS, SALT_LEN};
use crate::crypto::types::DerivedKey;

/// Derive the 32-byte key for `password` and an 8-byte envelope salt.
///
/// The password enters PBKDF2 as its UTF-8 bytes.
#[inline]
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    derive_key_with_iterations(password.as_bytes(), salt, PBKDF2_ITERATIONS)
}

/// PBKDF2-HMAC-SHA1 with an explicit iteration count and arbitrary salt.
///
/// Only `derive_key` is used on the wire; this exists so the primitive can be
/// checked against published vectors with small iteration counts.
pub fn derive_key_with_iterations(password: &[u8], salt: &[u8], iterations: u32) -> DerivedKey {
    let mut key = [0u8; KEY_LEN_32];
    pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut key);
    let derived = DerivedKey::from_bytes(key);
    key.zeroize();
    derived
}
