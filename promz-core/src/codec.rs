//! # Codec
//!
//! Conversion between [`Promz`] documents and their JSON byte form.
//!
//! Encoding is pretty-printed with a two-space indent and a fixed key order, so
//! encoding an unmodified document twice yields identical bytes. Decoding ignores
//! unknown keys; they are not carried over by a later encode.

use crate::error::Result;
use crate::promz::Promz;
use log::debug;

/// Decodes a document.
///
/// # Returns
///
/// * `Ok(Promz)` - If the bytes hold a complete, correctly typed document.
/// * `PromzError::Parse` - If the bytes are not JSON, or a field is missing or has the wrong type.
pub fn decode(bytes: &[u8]) -> Result<Promz> {
    let promz: Promz = serde_json::from_slice(bytes)?;
    debug!(
        "decoded .promz document '{}' (version {})",
        promz.metadata.title, promz.version
    );
    Ok(promz)
}

/// Encodes a document as indented JSON.
///
/// The document types always serialize, so this only fails if the writer does,
/// which cannot happen for an in-memory buffer.
pub fn encode(promz: &Promz) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(promz)?;
    Ok(bytes)
}
