//! Pre-flight guard check run before every I/O operation.
//!
//! Attribute states under which byte-level I/O is unsafe (compressed,
//! directory, encrypted, offline) fail the check up front. The read-only bit
//! is not a failure here: it rides along in the returned [`AccessGrant`] and
//! is enforced only by the write path, so reads stay valid on read-only
//! files.

use crate::error::{BinfileError, Result};
use crate::file_access::attributes::FileAttributes;
use log::warn;
use std::path::Path;

/// Verdict of a passing guard check.
///
/// A grant reflects the attributes observed by its own check and nothing
/// else; it is never cached or shared between operations, so two handles can
/// never see each other's read-only state.
#[derive(Debug, Clone, Copy)]
pub struct AccessGrant {
    read_only: bool,
}

impl AccessGrant {
    /// Whether the read-only attribute was set when this grant was issued.
    pub fn read_only(self) -> bool {
        self.read_only
    }
}

/// Run the guard check against the current attributes of `path`.
pub fn check_access(path: &Path) -> Result<AccessGrant> {
    let attributes = FileAttributes::probe(path)?;
    check_attributes(attributes, path)
}

/// Guard-check an already-probed attribute set.
///
/// Checks short-circuit in a fixed order: compressed, directory, encrypted,
/// offline. The read-only bit is captured into the grant before any of them
/// run.
pub fn check_attributes(attributes: FileAttributes, path: &Path) -> Result<AccessGrant> {
    let grant = AccessGrant {
        read_only: attributes.contains(FileAttributes::READ_ONLY),
    };
    if attributes.contains(FileAttributes::COMPRESSED) {
        warn!("{} is compressed, aborting", path.display());
        return Err(BinfileError::Compressed {
            path: path.to_path_buf(),
        });
    }
    if attributes.contains(FileAttributes::DIRECTORY) {
        warn!("{} is a directory, aborting", path.display());
        return Err(BinfileError::Directory {
            path: path.to_path_buf(),
        });
    }
    if attributes.contains(FileAttributes::ENCRYPTED) {
        warn!("{} is encrypted, aborting", path.display());
        return Err(BinfileError::Encrypted {
            path: path.to_path_buf(),
        });
    }
    if attributes.contains(FileAttributes::OFFLINE) {
        warn!("{} is offline, aborting", path.display());
        return Err(BinfileError::Offline {
            path: path.to_path_buf(),
        });
    }
    Ok(grant)
}
