//! crypto/random.rs
//! Per-envelope random material from the OS CSPRNG.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::{IV_LEN, SALT_LEN};
use crate::crypto::types::CryptoError;

/// Salts and IV for one envelope. Never reuse across envelopes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvelopeMaterial {
    pub encryption_salt: [u8; SALT_LEN],
    pub hmac_salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
}

impl EnvelopeMaterial {
    /// Fresh material from `OsRng`.
    pub fn random() -> Result<Self, CryptoError> {
        Ok(Self {
            encryption_salt: random_array::<SALT_LEN>()?,
            hmac_salt: random_array::<SALT_LEN>()?,
            iv: random_array::<IV_LEN>()?,
        })
    }
}

/// N bytes from the OS entropy source.
pub fn random_array<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut out = [0u8; N];
    OsRng
        .try_fill_bytes(&mut out)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(out)
}
