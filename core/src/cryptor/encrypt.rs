// ## 📂 File: `src/cryptor/encrypt.rs`

//! cryptor/encrypt.rs
//! Encrypt pipeline: schema -> random material -> key -> cipher -> HMAC ->
//! envelope -> base-64.

use crate::constants::HMAC_LEN;
use crate::cryptor::config::CryptorConfig;
use crate::crypto::{cipher, compute_tag, derive_key, EnvelopeMaterial};
use crate::envelope::{tag_to_field, Envelope};
use crate::schema::{configuration_for, SchemaVersion};
use crate::types::CryptorError;
use crate::utils::encode_base64;

/// Stateless encryptor. Holds only immutable configuration, so one value can
/// serve concurrent calls from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Encryptor {
    config: CryptorConfig,
}

impl Encryptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CryptorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CryptorConfig {
        &self.config
    }

    /// Encrypt with the configured default schema and return base-64 text.
    pub fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<String, CryptorError> {
        self.encrypt_with_schema(plaintext, password, self.config.default_schema)
    }

    /// Encrypt with an explicit schema and return base-64 text.
    pub fn encrypt_with_schema(
        &self,
        plaintext: &[u8],
        password: &str,
        schema: SchemaVersion,
    ) -> Result<String, CryptorError> {
        let raw = self.encrypt_to_bytes(plaintext, password, schema)?;
        Ok(encode_base64(&raw))
    }

    /// UTF-8 text in, base-64 text out.
    pub fn encrypt_str(&self, plaintext: &str, password: &str) -> Result<String, CryptorError> {
        self.encrypt(plaintext.as_bytes(), password)
    }

    /// Raw envelope bytes, no text encoding.
    pub fn encrypt_to_bytes(
        &self,
        plaintext: &[u8],
        password: &str,
        schema: SchemaVersion,
    ) -> Result<Vec<u8>, CryptorError> {
        Ok(self.seal(plaintext, password, schema)?.to_bytes())
    }

    /// Build an envelope with fresh random salts and IV.
    pub fn seal(
        &self,
        plaintext: &[u8],
        password: &str,
        schema: SchemaVersion,
    ) -> Result<Envelope, CryptorError> {
        let material = EnvelopeMaterial::random()?;
        seal_with_material(plaintext, password, schema, &material)
    }
}

/// Build an envelope from caller-supplied salts and IV.
///
/// Deterministic given its inputs. Production paths go through
/// `Encryptor::seal`, which draws the material from the OS CSPRNG; reusing
/// material across envelopes reuses keystream under schema 0.
pub fn seal_with_material(
    plaintext: &[u8],
    password: &str,
    schema: SchemaVersion,
    material: &EnvelopeMaterial,
) -> Result<Envelope, CryptorError> {
    let config = configuration_for(schema);
    tracing::debug!(
        schema = schema.as_byte(),
        mode = ?config.aes_mode,
        plaintext_len = plaintext.len(),
        "encrypting envelope"
    );

    let key = derive_key(password, &material.encryption_salt);
    let ciphertext = cipher::encrypt(config.aes_mode, &key, &material.iv, plaintext)?;

    let mut envelope = Envelope {
        schema,
        options: config.options,
        encryption_salt: material.encryption_salt,
        hmac_salt: material.hmac_salt,
        iv: material.iv,
        ciphertext,
        hmac: [0u8; HMAC_LEN],
    };

    let tag = compute_tag(&config, &envelope, password)?;
    envelope.hmac = tag_to_field(&tag)?;

    Ok(envelope)
}
