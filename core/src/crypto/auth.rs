// ## 📂 File: `src/crypto/auth.rs`

//! crypto/auth.rs
//! Envelope authentication: HMAC tag computation and verification.
//!
//! Design notes:
//! - The HMAC key is derived from the password and the envelope's HMAC salt,
//!   independent of the encryption key.
//! - Scope comes from the configuration: ciphertext only (schema 0, 1) or
//!   header followed by ciphertext (schema 2, 3).
//! - SHA-1 tags (schema 0) are right-padded with zeros to the 32-byte field.
//! - Verification compares in constant time and must run before any
//!   decryption. A mismatch yields no plaintext at all.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::constants::{HMAC_LEN, KEY_LEN_32};
use crate::crypto::kdf::derive_key;
use crate::crypto::types::CryptoError;
use crate::envelope::Envelope;
use crate::schema::{Configuration, HmacAlgorithm};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Raw HMAC over the concatenation of `parts`, no padding.
pub fn hmac_digest(
    algorithm: HmacAlgorithm,
    key: &[u8],
    parts: &[&[u8]],
) -> Result<Vec<u8>, CryptoError> {
    let bad_key = |_: hmac::digest::InvalidLength| CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: key.len() };

    match algorithm {
        HmacAlgorithm::Sha1 => {
            let mut mac = <HmacSha1 as Mac>::new_from_slice(key).map_err(bad_key)?;
            for part in parts {
                mac.update(part);
            }
            Ok(mac.finalize().into_bytes().to_vec())
        }
        HmacAlgorithm::Sha256 => {
            let mut mac = <HmacSha256 as Mac>::new_from_slice(key).map_err(bad_key)?;
            for part in parts {
                mac.update(part);
            }
            Ok(mac.finalize().into_bytes().to_vec())
        }
    }
}

/// Compute the envelope tag for `envelope` under `config` and `password`.
///
/// Only the header fields and ciphertext of `envelope` are read; its stored
/// tag is ignored.
pub fn compute_tag(
    config: &Configuration,
    envelope: &Envelope,
    password: &str,
) -> Result<Vec<u8>, CryptoError> {
    let key = derive_key(password, &envelope.hmac_salt);

    let header = envelope.header_bytes();
    let mut parts: Vec<&[u8]> = Vec::with_capacity(2);
    if config.hmac_includes_header {
        parts.push(&header);
    }
    parts.push(&envelope.ciphertext);

    let mut tag = hmac_digest(config.hmac_algorithm, key.as_ref(), &parts)?;

    if config.hmac_padded_to_fixed_len && tag.len() < HMAC_LEN {
        tag.resize(HMAC_LEN, 0x00);
    }

    Ok(tag)
}

/// Recompute the tag and compare it with the stored one.
///
/// Errors:
/// - `CryptoError::TagMismatch` on any difference, including length. Wrong
///   password and modified data are indistinguishable.
pub fn verify_tag(
    config: &Configuration,
    envelope: &Envelope,
    password: &str,
) -> Result<(), CryptoError> {
    let expected = compute_tag(config, envelope, password)?;
    if constant_time_eq(&expected, &envelope.hmac) {
        Ok(())
    } else {
        Err(CryptoError::TagMismatch)
    }
}

/// Length check first, then a comparison that touches every byte regardless
/// of where the first difference is.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
