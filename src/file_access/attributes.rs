//! Platform file attribute probing for the guard check.
//!
//! The guard check consults a small attribute word describing the file as the
//! filesystem currently sees it. On Windows the word comes straight from the
//! native metadata attributes; elsewhere the probe synthesizes the subset it
//! can observe (read-only from the permission bits, directory from the file
//! type) and leaves the rest unset.

use crate::error::{BinfileError, Result};
use bitflags::bitflags;
use std::path::Path;

bitflags! {
    /// File attribute bits consulted by the guard check.
    ///
    /// Values mirror the Windows `FILE_ATTRIBUTE_*` constants so the probe
    /// can pass the native attribute word through unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileAttributes: u32 {
        const READ_ONLY = 0x0000_0001;
        const DIRECTORY = 0x0000_0010;
        const COMPRESSED = 0x0000_0800;
        const OFFLINE = 0x0000_1000;
        const ENCRYPTED = 0x0000_4000;
    }
}

impl FileAttributes {
    /// Query the current attributes of `path`.
    ///
    /// Attributes are re-read on every call; the guard check relies on this
    /// to observe attribute changes made after a handle was opened.
    pub fn probe(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            BinfileError::io(format!("Failed to read metadata for {}", path.display()), e)
        })?;
        Ok(Self::from_metadata(&metadata))
    }

    #[cfg(windows)]
    fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        use std::os::windows::fs::MetadataExt;
        Self::from_bits_truncate(metadata.file_attributes())
    }

    #[cfg(not(windows))]
    fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        let mut attributes = Self::empty();
        if metadata.permissions().readonly() {
            attributes |= Self::READ_ONLY;
        }
        if metadata.is_dir() {
            attributes |= Self::DIRECTORY;
        }
        attributes
    }
}
