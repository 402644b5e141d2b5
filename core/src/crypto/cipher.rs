// ## 📂 File: `src/crypto/cipher.rs`

//! crypto/cipher.rs
//! AES-256 transforms for the two envelope cipher modes.
//!
//! Design notes:
//! - CBC: standard chaining with PKCS#7 padding. An exact multiple of the
//!   block size still gains a full padding block.
//! - CTR: built by hand from raw ECB blocks and XOR, because the counter step
//!   is not the standard big-endian increment (see
//!   `increment_counter_first_byte`). Encrypt and decrypt are the same
//!   transform.
//! - Mode selection comes from the resolved `Configuration`, passed in by the
//!   caller. Nothing here keeps state between calls.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncrypt, BlockEncryptMut, KeyInit, KeyIvInit};

use crate::constants::{AES_BLOCK_LEN, IV_LEN, KEY_LEN_32};
use crate::crypto::types::{CryptoError, DerivedKey};
use crate::schema::AesMode;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt `plaintext` with the mode's construction.
pub fn encrypt(
    mode: AesMode,
    key: &DerivedKey,
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    match mode {
        AesMode::Ctr => aes_ctr_little_endian_no_padding(key.as_ref(), iv, plaintext),
        AesMode::Cbc => encrypt_aes_cbc_pkcs7(key.as_ref(), iv, plaintext),
    }
}

/// Invert `encrypt`. CTR runs the same transform again.
pub fn decrypt(
    mode: AesMode,
    key: &DerivedKey,
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    match mode {
        AesMode::Ctr => aes_ctr_little_endian_no_padding(key.as_ref(), iv, ciphertext),
        AesMode::Cbc => decrypt_aes_cbc_pkcs7(key.as_ref(), iv, ciphertext),
    }
}

/// AES-256-CBC with PKCS#7 padding. Output is always 1..=16 bytes longer than
/// the input and a multiple of the block size.
pub fn encrypt_aes_cbc_pkcs7(
    key: &[u8],
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLen {
        expected: KEY_LEN_32,
        actual: key.len(),
    })?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// AES-256-CBC decryption followed by PKCS#7 unpadding.
///
/// Errors:
/// - `CryptoError::InvalidPadding` if the ciphertext is empty, not a whole
///   number of blocks, or its last block does not carry valid padding.
pub fn decrypt_aes_cbc_pkcs7(
    key: &[u8],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_LEN != 0 {
        return Err(CryptoError::InvalidPadding);
    }

    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLen {
        expected: KEY_LEN_32,
        actual: key.len(),
    })?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::InvalidPadding)
}

/// Schema 0 counter mode: keystream = ECB(counter blocks), output = data XOR
/// keystream, truncated to `data.len()`. Self-inverse.
pub fn aes_ctr_little_endian_no_padding(
    key: &[u8],
    iv: &[u8; IV_LEN],
    data: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut keystream = ctr_counter_blocks(iv, data.len());
    encrypt_aes_ecb_no_padding(key, &mut keystream)?;
    Ok(xor_cyclic(data, &keystream))
}

/// Counter blocks for a payload of `payload_len` bytes:
/// `ceil(payload_len / 16)` blocks, starting at `iv`.
pub fn ctr_counter_blocks(iv: &[u8; IV_LEN], payload_len: usize) -> Vec<u8> {
    let block_count = payload_len.div_ceil(AES_BLOCK_LEN);
    tracing::trace!(block_count, "building CTR counter blocks");

    let mut counter = *iv;
    let mut blocks = Vec::with_capacity(block_count * AES_BLOCK_LEN);
    for _ in 0..block_count {
        blocks.extend_from_slice(&counter);
        increment_counter_first_byte(&mut counter);
    }
    blocks
}

/// Schema 0 counter step: add 1 to byte 0 only, wrapping at 256 with no carry
/// into byte 1.
///
/// Compatibility: this is the CommonCrypto behaviour every schema 0 envelope
/// was written with. A "correct" carrying increment changes the keystream
/// from block 257 onward and breaks decryption of existing data.
#[inline]
pub fn increment_counter_first_byte(counter: &mut [u8; IV_LEN]) {
    counter[0] = counter[0].wrapping_add(1);
}

/// Raw AES-256 block encryption in place, no chaining, no padding.
/// `data` must be a whole number of blocks.
pub fn encrypt_aes_ecb_no_padding(key: &[u8], data: &mut [u8]) -> Result<(), CryptoError> {
    if data.len() % AES_BLOCK_LEN != 0 {
        return Err(CryptoError::Failure(format!(
            "ECB input must be block aligned, got {} bytes",
            data.len()
        )));
    }

    let cipher = Aes256::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
        expected: KEY_LEN_32,
        actual: key.len(),
    })?;
    for block in data.chunks_exact_mut(AES_BLOCK_LEN) {
        cipher.encrypt_block(aes::Block::from_mut_slice(block));
    }
    Ok(())
}

// XOR `data` with `keystream`, restarting the keystream if it runs out.
fn xor_cyclic(data: &[u8], keystream: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(keystream.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}
