// ## 📂 File: `src/schema/types.rs`

//! schema/types.rs
//! Schema enums and the resolved configuration value.

use std::fmt;
use num_enum::TryFromPrimitive;

use crate::constants::{options_ids, schema_ids};
use crate::utils::enum_name_or_hex;

/// Schema version carried in the first envelope byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum SchemaVersion {
    V0 = schema_ids::V0,
    V1 = schema_ids::V1,
    V2 = schema_ids::V2,
    /// Resolves to the V2 configuration. Not a distinct contract.
    V3 = schema_ids::V3,
}

impl SchemaVersion {
    /// Version used when the caller does not pick one.
    pub const LATEST: SchemaVersion = SchemaVersion::V2;

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn verify(raw: u8) -> Result<Self, SchemaError> {
        SchemaVersion::try_from_primitive(raw).map_err(|_| SchemaError::UnsupportedSchema { raw })
    }
}

/// AES construction selected by the schema.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AesMode {
    /// AES-256-CTR built from raw ECB blocks, first-byte counter increment.
    Ctr,
    /// AES-256-CBC with PKCS#7 padding.
    Cbc,
}

/// HMAC hash function selected by the schema.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HmacAlgorithm {
    Sha1,
    Sha256,
}

impl HmacAlgorithm {
    /// Raw tag length before any padding.
    pub fn output_len(self) -> usize {
        match self {
            HmacAlgorithm::Sha1 => 20,
            HmacAlgorithm::Sha256 => 32,
        }
    }
}

/// Immutable configuration resolved from a schema byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub schema: SchemaVersion,
    pub aes_mode: AesMode,
    pub options: u8,
    pub hmac_includes_header: bool,
    pub hmac_padded_to_fixed_len: bool,
    pub hmac_algorithm: HmacAlgorithm,
}

impl Configuration {
    pub(crate) const fn v0() -> Self {
        Self {
            schema: SchemaVersion::V0,
            aes_mode: AesMode::Ctr,
            options: options_ids::V0,
            hmac_includes_header: false,
            hmac_padded_to_fixed_len: true,
            hmac_algorithm: HmacAlgorithm::Sha1,
        }
    }

    pub(crate) const fn v1() -> Self {
        Self {
            schema: SchemaVersion::V1,
            aes_mode: AesMode::Cbc,
            options: options_ids::V1,
            hmac_includes_header: false,
            hmac_padded_to_fixed_len: false,
            hmac_algorithm: HmacAlgorithm::Sha256,
        }
    }

    pub(crate) const fn v2(schema: SchemaVersion) -> Self {
        Self {
            schema,
            aes_mode: AesMode::Cbc,
            options: options_ids::V1,
            hmac_includes_header: true,
            hmac_padded_to_fixed_len: false,
            hmac_algorithm: HmacAlgorithm::Sha256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Schema byte outside the registry.
    UnsupportedSchema { raw: u8 },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::UnsupportedSchema { raw } =>
                write!(f, "unsupported schema version: {}",
                       enum_name_or_hex::<SchemaVersion>(*raw)),
        }
    }
}

impl std::error::Error for SchemaError {}
