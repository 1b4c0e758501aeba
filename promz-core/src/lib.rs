//! # promz Core
//!
//! This crate provides the core functionality for `.promz` documents.
//!
//! A `.promz` file is a self-describing JSON document that stores a reusable prompt
//! template together with its metadata, usage examples, variable placeholders and
//! revision history. The prompt is stored as data only; it is never rendered.
//!
//! # Modules
//!
//! - [`promz`] - The document model and the operations that modify it
//! - [`schema`] - The JSON-Schema every document must satisfy
//! - [`codec`] - Conversion between documents and JSON bytes
//! - [`validator`] - Schema validation reporting every violation
//! - [`file_storage`] - Reading, writing and validating `.promz` files
//! - [`error`] - The error type shared by all of the above
//!
//! # Examples
//!
//! ```rust
//! use promz_core::codec;
//! use promz_core::promz::Example;
//! use promz_core::validator;
//!
//! let bytes = br#"{
//!     "version": "1.0",
//!     "metadata": {
//!         "title": "Story", "description": "Short stories", "author": "Jane",
//!         "tags": ["a", "b"],
//!         "created_at": "2024-11-23T10:00:00Z",
//!         "updated_at": "2024-11-23T10:00:00Z"
//!     },
//!     "content": {"prompt": "Tell a story.", "examples": [], "variables": [], "apps": []},
//!     "history": []
//! }"#;
//!
//! let mut promz = codec::decode(bytes).expect("Failed to decode");
//! promz.set_prompt_text("Tell a short story.");
//! promz.add_example(Example::new("", "Once upon a time..."));
//! promz.add_tag("c");
//!
//! let encoded = codec::encode(&promz).expect("Failed to encode");
//! validator::validate_bytes(&encoded).expect("Document should be valid");
//! ```

pub mod codec;
pub mod error;
pub mod file_storage;
pub mod promz;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod fixtures;

pub use error::{PromzError, Result};
pub use promz::{Content, Example, History, Metadata, Promz, Variable};
