use crate::schema::SchemaVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptorConfig {
    /// Schema used by `Encryptor::encrypt` when the caller does not pick one.
    /// - `SchemaVersion::LATEST` (V2) by default.
    pub default_schema: SchemaVersion,
}

impl Default for CryptorConfig {
    fn default() -> Self {
        Self { default_schema: SchemaVersion::LATEST }
    }
}

impl CryptorConfig {
    pub fn new(default_schema: Option<SchemaVersion>) -> Self {
        Self {
            default_schema: default_schema.unwrap_or(SchemaVersion::LATEST),
        }
    }
}
