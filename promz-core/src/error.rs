//! # Errors
//!
//! A single error type, [`PromzError`], is shared by every operation of the crate.
//! Nothing is recovered locally: each failure is surfaced to the caller together
//! with the operation (and path, for file access) that produced it.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Open,
    Create,
    Read,
    Write,
    Walk,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileOperation::Open => "open",
            FileOperation::Create => "create",
            FileOperation::Read => "read",
            FileOperation::Write => "write",
            FileOperation::Walk => "walk",
        };
        f.write_str(name)
    }
}

/// A single structural mismatch between a document and the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the offending value, empty for the document root.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Every violation found in one validation pass, in the order they were reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

#[derive(Error, Debug)]
pub enum PromzError {
    #[error("failed to {operation} file {}: {source}", path.display())]
    File {
        operation: FileOperation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse .promz document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid .promz document: {0}")]
    SchemaViolation(Violations),

    #[error("schema could not be compiled: {0}")]
    Schema(String),

    #[error("not a directory: {0}")]
    InvalidDirectory(String),
}

impl PromzError {
    pub(crate) fn file(operation: FileOperation, path: impl Into<PathBuf>, source: io::Error) -> Self {
        PromzError::File {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PromzError>;
