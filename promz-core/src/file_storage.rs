//! # File Storage
//!
//! Reading, writing and validating `.promz` files on the local filesystem.
//!
//! Each call opens the file once, reads or writes it in full and closes it before
//! returning, on success and on failure alike.
//!
//! # Examples
//!
//! ```rust
//! use chrono::Utc;
//! use promz_core::file_storage;
//! use promz_core::promz::{Content, Metadata, Promz};
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let path = temp_dir.path().join("greeting.promz");
//!
//! let metadata = Metadata::new(
//!     "Greeting".to_string(),
//!     "Says hello".to_string(),
//!     "Jane".to_string(),
//!     Utc::now(),
//! );
//! let promz = Promz::new("1.0".to_string(), metadata, Content::new("Hello, world!".to_string()));
//!
//! file_storage::write(&promz, &path).expect("Failed to write promz");
//! file_storage::validate_file(&path).expect("Written file should be valid");
//! assert_eq!(promz, file_storage::read(&path).expect("Failed to read promz"));
//! ```

use crate::codec;
use crate::error::{FileOperation, PromzError, Result};
use crate::promz::Promz;
use crate::validator;
use log::debug;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Conventional extension of promz files.
pub const PROMZ_EXTENSION: &str = "promz";

/// Reads a whole file into memory.
fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file =
        File::open(path).map_err(|e| PromzError::file(FileOperation::Open, path, e))?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| PromzError::file(FileOperation::Read, path, e))?;
    Ok(data)
}

/// Reads a `.promz` file.
///
/// # Arguments
///
/// * `path` - The file to be read.
///
/// # Returns
///
/// * `Ok(Promz)` - If the file is read and decoded correctly.
/// * `PromzError::File` - If the file cannot be opened or read.
/// * `PromzError::Parse` - If its content is not a promz document.
pub fn read(path: impl AsRef<Path>) -> Result<Promz> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let data = read_bytes(path)?;
    codec::decode(&data)
}

/// Writes a document to a `.promz` file.
///
/// The file is created if it doesn't exist and truncated if it does.
/// No schema check is performed; call [`validate_file`] afterwards if needed.
///
/// # Arguments
///
/// * `promz` - The document to be written.
/// * `path` - The destination file.
pub fn write(promz: &Promz, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let data = codec::encode(promz)?;

    let mut file =
        File::create(path).map_err(|e| PromzError::file(FileOperation::Create, path, e))?;
    file.write_all(&data)
        .map_err(|e| PromzError::file(FileOperation::Write, path, e))?;
    file.flush()
        .map_err(|e| PromzError::file(FileOperation::Write, path, e))?;

    debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Validates a `.promz` file against the schema.
///
/// The raw file content is validated, not a re-encoded document, so keys that
/// decoding would silently accept or drop are still reported.
///
/// # Returns
///
/// * `Ok(())` - If the file is a valid promz document.
/// * `PromzError::File` - If the file cannot be opened or read.
/// * `PromzError::Parse` - If the file is not JSON.
/// * `PromzError::SchemaViolation` - With every violation found.
pub fn validate_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!("validating {}", path.display());
    let data = read_bytes(path)?;
    validator::validate_bytes(&data)
}

/// Finds every `.promz` file under `dir`, recursively, sorted by path.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The files found, possibly none.
/// * `PromzError::InvalidDirectory` - If `dir` is not a directory.
/// * `PromzError::File` - If part of the tree cannot be read.
pub fn find_promz_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(PromzError::InvalidDirectory(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            PromzError::file(FileOperation::Walk, path, e.into())
        })?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == PROMZ_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
