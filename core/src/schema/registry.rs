// ## src/schema/registry.rs

//! schema/registry.rs
//! Schema byte -> configuration lookup.

use crate::schema::types::{Configuration, SchemaError, SchemaVersion};

/// Resolve the fixed configuration for a schema version.
///
/// V3 returns the V2 settings with `schema` left as V3, so the header it
/// produces still starts with 0x03.
pub fn configuration_for(schema: SchemaVersion) -> Configuration {
    match schema {
        SchemaVersion::V0 => Configuration::v0(),
        SchemaVersion::V1 => Configuration::v1(),
        SchemaVersion::V2 | SchemaVersion::V3 => Configuration::v2(schema),
    }
}

/// Check a raw schema byte against the registry, failing closed.
pub fn resolve_version(raw: u8) -> Result<SchemaVersion, SchemaError> {
    SchemaVersion::verify(raw).map_err(|e| {
        tracing::warn!(schema = raw, "rejecting unsupported schema byte");
        e
    })
}

/// Resolve a raw schema byte straight to its configuration.
pub fn resolve(raw: u8) -> Result<Configuration, SchemaError> {
    resolve_version(raw).map(configuration_for)
}
