// ## 📂 File: `src/envelope/decode.rs`
//! src/envelope/decode.rs
//!
//! Envelope parsing.
//!
//! Design notes:
//! - Field order must match `encode.rs`.
//! - The length floor (header + tag) is checked before anything is read, so
//!   every later slice is in bounds.
//! - The schema byte is resolved before the remaining fields are read; an
//!   unknown version fails closed without touching the rest.
//! - Nothing here is authenticated. Callers verify the HMAC before trusting
//!   any field beyond the schema.

use crate::constants::{HEADER_LEN, HMAC_LEN, IV_LEN, MIN_ENVELOPE_LEN, SALT_LEN};
use crate::envelope::types::{Envelope, EnvelopeError};
use crate::schema::resolve_version;

/// Split a raw envelope into its fields.
///
/// # Returns
/// - `Ok(Envelope)` with ciphertext length `buf.len() - 34 - 32`.
/// - `Err(EnvelopeError::Truncated)` if `buf` is shorter than 66 bytes.
/// - `Err(EnvelopeError::UnsupportedSchema)` for an unknown schema byte.
pub fn parse(buf: &[u8]) -> Result<Envelope, EnvelopeError> {
    if buf.len() < MIN_ENVELOPE_LEN {
        return Err(EnvelopeError::Truncated { have: buf.len(), need: MIN_ENVELOPE_LEN });
    }

    let mut i = 0usize;
    #[inline] fn get_u8(buf: &[u8], i: &mut usize) -> u8 { let v = buf[*i]; *i += 1; v }
    #[inline] fn get_bytes<const N: usize>(buf: &[u8], i: &mut usize) -> [u8; N] {
        let mut dst = [0u8; N]; dst.copy_from_slice(&buf[*i..*i + N]); *i += N; dst
    }

    let raw_schema = get_u8(buf, &mut i);
    let schema = resolve_version(raw_schema)?;              // 0      schema

    let options         = get_u8(buf, &mut i);                 // 1      options
    let encryption_salt = get_bytes::<SALT_LEN>(buf, &mut i);  // 2..10  encryption salt
    let hmac_salt       = get_bytes::<SALT_LEN>(buf, &mut i);  // 10..18 HMAC salt
    let iv              = get_bytes::<IV_LEN>(buf, &mut i);    // 18..34 IV

    debug_assert_eq!(i, HEADER_LEN, "header read incorrect length");

    let ciphertext_len = buf.len() - HEADER_LEN - HMAC_LEN;
    let ciphertext = buf[i..i + ciphertext_len].to_vec();
    i += ciphertext_len;

    let hmac = get_bytes::<HMAC_LEN>(buf, &mut i);

    Ok(Envelope { schema, options, encryption_salt, hmac_salt, iv, ciphertext, hmac })
}
