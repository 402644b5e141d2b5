use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use num_enum::TryFromPrimitive;

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Standard alphabet, padded: 3 raw bytes -> 4 characters.
pub fn encode_base64(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}

/// Inverse of `encode_base64`.
///
/// ASCII whitespace is skipped wherever it appears, so line-wrapped (MIME
/// style) envelopes decode. Any other non-alphabet character or bad padding
/// is rejected.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    STANDARD.decode(compact)
}
