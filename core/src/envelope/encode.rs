// ## 📂 File: `src/envelope/encode.rs`
//! src/envelope/encode.rs
//!
//! Envelope serialization.
//!
//! Design notes:
//! - Field order must match `decode.rs` exactly.
//! - The header bytes produced here are also the HMAC input for schema 2/3,
//!   so this is the single place that lays them out.

use crate::constants::{HEADER_LEN, HMAC_LEN};
use crate::envelope::types::{Envelope, EnvelopeError};

/// Concatenate schema, options, encryption salt, HMAC salt and IV.
#[inline]
pub fn assemble_header(e: &Envelope) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    let mut i = 0usize;

    fn put_u8(out: &mut [u8], i: &mut usize, v: u8) {
        out[*i] = v;
        *i += 1;
    }
    fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += b.len();
    }

    put_u8(&mut out, &mut i, e.schema.as_byte());   // 0      schema
    put_u8(&mut out, &mut i, e.options);            // 1      options
    put_bytes(&mut out, &mut i, &e.encryption_salt); // 2..10  encryption salt
    put_bytes(&mut out, &mut i, &e.hmac_salt);      // 10..18 HMAC salt
    put_bytes(&mut out, &mut i, &e.iv);             // 18..34 IV

    debug_assert_eq!(i, HEADER_LEN, "header wrote incorrect length");

    out
}

/// Fit a computed tag into the fixed 32-byte HMAC field.
pub fn tag_to_field(tag: &[u8]) -> Result<[u8; HMAC_LEN], EnvelopeError> {
    if tag.len() != HMAC_LEN {
        return Err(EnvelopeError::InvalidTagLen { have: tag.len(), need: HMAC_LEN });
    }
    let mut field = [0u8; HMAC_LEN];
    field.copy_from_slice(tag);
    Ok(field)
}

impl Envelope {
    /// Header bytes, as covered by the HMAC for schema 2/3.
    pub fn header_bytes(&self) -> [u8; HEADER_LEN] {
        assemble_header(self)
    }

    /// Full wire encoding: header || ciphertext || HMAC.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_len());
        out.extend_from_slice(&assemble_header(self));
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.hmac);
        out
    }

    /// Lowercase hex of the wire encoding, for diagnostics.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}
