//! # Validator
//!
//! Checks documents against the [schema](crate::schema).
//!
//! Validation is structural only and collects every violation in a single pass.
//! Rules enforced by the document operations, such as tag uniqueness, are not
//! checked here.

use crate::codec;
use crate::error::{PromzError, Result, Violation, Violations};
use crate::promz::Promz;
use crate::schema::schema;
use jsonschema::{Draft, JSONSchema};
use log::debug;
use serde_json::Value;
use std::sync::LazyLock;

static COMPILED_SCHEMA: LazyLock<std::result::Result<JSONSchema, String>> = LazyLock::new(|| {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema())
        .map_err(|e| e.to_string())
});

fn compiled_schema() -> Result<&'static JSONSchema> {
    COMPILED_SCHEMA
        .as_ref()
        .map_err(|message| PromzError::Schema(message.clone()))
}

/// Lists every schema violation of `instance`. An empty list means it is valid.
pub fn violations(instance: &Value) -> Result<Vec<Violation>> {
    let compiled = compiled_schema()?;
    let found = match compiled.validate(instance) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|error| Violation {
                path: error.instance_path.to_string(),
                message: error.to_string(),
            })
            .collect(),
    };
    Ok(found)
}

/// Validates an already parsed JSON value.
///
/// # Returns
///
/// * `Ok(())` - If the value satisfies the schema.
/// * `PromzError::SchemaViolation` - With all violations found, if it doesn't.
pub fn validate_value(instance: &Value) -> Result<()> {
    let found = violations(instance)?;
    if found.is_empty() {
        Ok(())
    } else {
        debug!("document has {} schema violation(s)", found.len());
        Err(PromzError::SchemaViolation(Violations(found)))
    }
}

/// Validates the raw bytes of a document.
///
/// # Returns
///
/// * `Ok(())` - If the bytes are JSON and satisfy the schema.
/// * `PromzError::Parse` - If the bytes are not JSON.
/// * `PromzError::SchemaViolation` - With all violations found.
pub fn validate_bytes(bytes: &[u8]) -> Result<()> {
    let instance: Value = serde_json::from_slice(bytes)?;
    validate_value(&instance)
}

/// Validates the canonical encoding of an in-memory document.
pub fn validate_document(promz: &Promz) -> Result<()> {
    validate_bytes(&codec::encode(promz)?)
}
