//! Whole-file queries and extraction by path.
//!
//! These operations open their own scoped handle (or delegate to a one-shot
//! filesystem read) and release it before returning.

use crate::encoding::TextEncoding;
use crate::error::{BinfileError, Result};
use crate::file_access::factory;
use log::warn;
use std::path::Path;

/// Byte length of the file at `path`.
///
/// Opens a scoped, guard-checked handle and drops it before returning.
pub fn length(path: impl AsRef<Path>) -> Result<u64> {
    let accessor = factory::open(path)?;
    accessor.len()
}

/// Read the entire file at `path` into memory.
///
/// Delegates wholly to the byte-level filesystem read; no guard check runs
/// on this path.
pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path)
        .map_err(|e| BinfileError::io(format!("Failed to read {}", path.display()), e))
}

/// Read the entire file at `path` and decode it with `encoding`.
///
/// An empty file fails with [`BinfileError::EmptyBuffer`] before any decode
/// is attempted.
pub fn read_string(encoding: TextEncoding, path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let contents = read_all(path)?;
    if contents.is_empty() {
        warn!(
            "attempting to decode {} from an empty buffer, aborting",
            path.display()
        );
        return Err(BinfileError::EmptyBuffer);
    }
    encoding.decode(&contents)
}
