//! Constructors producing validated [`FileAccessor`] handles.
//!
//! All handles leave here already guard-checked: a caller either receives a
//! usable read/write handle or a typed error, never an open handle that the
//! next operation is guaranteed to refuse.

use crate::error::{BinfileError, Result};
use crate::file_access::accessor::FileAccessor;
use crate::file_access::guard;
use log::warn;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Open an existing file for reading and writing, then guard-check it.
///
/// On guard failure the freshly opened handle is dropped before the error
/// returns. The operating system may refuse the read/write open outright for
/// a file carrying the read-only attribute; when it does not, the guard
/// check records the bit and the write path refuses later.
pub fn open(path: impl AsRef<Path>) -> Result<FileAccessor> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("{} doesn't exist", path.display());
        return Err(BinfileError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| BinfileError::io(format!("Failed to open {}", path.display()), e))?;
    guard::check_access(path)?;
    Ok(FileAccessor::new(file, path.to_path_buf()))
}

/// Create (or truncate) `path` from `buffer` in a single transfer.
///
/// When `clear` is set the source buffer is zeroed after the transfer,
/// whether or not the transfer succeeded. An empty buffer fails before the
/// destination is touched and before any clearing.
pub fn create(buffer: &mut [u8], clear: bool, path: impl AsRef<Path>) -> Result<FileAccessor> {
    let path = path.as_ref();
    if buffer.is_empty() {
        warn!(
            "attempting to create {} from an empty buffer, aborting",
            path.display()
        );
        return Err(BinfileError::EmptyBuffer);
    }

    let result = write_new(buffer, path);
    if clear {
        buffer.fill(0);
    }
    result
}

fn write_new(buffer: &[u8], path: &Path) -> Result<FileAccessor> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| BinfileError::io(format!("Failed to create {}", path.display()), e))?;
    file.write_all(buffer).map_err(|e| {
        BinfileError::io(
            format!("Failed to write {} bytes to {}", buffer.len(), path.display()),
            e,
        )
    })?;
    Ok(FileAccessor::new(file, path.to_path_buf()))
}

/// Create a zero-filled pad file of exactly `size` bytes.
///
/// Composes over [`create`] with the clear flag set; a size of zero fails
/// through the empty-buffer precondition.
pub fn dummy(size: u64, path: impl AsRef<Path>) -> Result<()> {
    let mut buffer = vec![0u8; size as usize];
    create(&mut buffer, true, path).map(drop)
}
