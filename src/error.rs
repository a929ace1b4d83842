//! Error types and handling infrastructure for binfile.
//!
//! This module provides a centralized error handling system using `thiserror`
//! for typed error values. No operation in this crate panics or unwinds into
//! the caller: every failure is reported as a [`BinfileError`] through the
//! standard [`Result`] alias, and a human-readable diagnostic is logged at the
//! point of failure.
//!
//! ## Design Principles
//!
//! - **Branchable kinds**: callers can match on the variant, not parse text
//! - **Context preservation**: wrapped I/O errors keep their source chain
//! - **Consistency**: standardized Result type across all modules

use crate::encoding::TextEncoding;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for binfile operations.
///
/// This enum covers every failure class of the access layer: precondition
/// failures, attribute-guard failures, the read-only write refusal, codec
/// failures, and underlying storage errors.
#[derive(Error, Debug)]
pub enum BinfileError {
    /// Underlying storage failure (seek, transfer, metadata query, ...)
    #[error("File operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File does not exist at the given path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Guard check found the compressed attribute set
    #[error("File is compressed: {path}")]
    Compressed { path: PathBuf },

    /// Guard check found a directory where a file was expected
    #[error("Path is a directory: {path}")]
    Directory { path: PathBuf },

    /// Guard check found the encrypted attribute set
    #[error("File is encrypted: {path}")]
    Encrypted { path: PathBuf },

    /// Guard check found the offline attribute set
    #[error("File is offline: {path}")]
    Offline { path: PathBuf },

    /// Write refused because the guard check observed the read-only attribute
    #[error("File is read-only: {path}")]
    ReadOnly { path: PathBuf },

    /// A transfer was attempted with a zero-length buffer
    #[error("Buffer is empty")]
    EmptyBuffer,

    /// Sector alignment requested with a sector size of zero
    #[error("Sector size must be non-zero")]
    ZeroSector,

    /// Text could not be represented in the requested encoding
    #[error("Cannot encode text as {encoding}: {message}")]
    Encode {
        encoding: TextEncoding,
        message: String,
    },

    /// Bytes did not form a valid sequence in the requested encoding
    #[error("Cannot decode bytes as {encoding}: {message}")]
    Decode {
        encoding: TextEncoding,
        message: String,
    },
}

/// Standard Result type for binfile operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the binfile codebase.
pub type Result<T> = std::result::Result<T, BinfileError>;

impl BinfileError {
    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an Encode error with a descriptive message
    pub fn encode(encoding: TextEncoding, message: impl Into<String>) -> Self {
        Self::Encode {
            encoding,
            message: message.into(),
        }
    }

    /// Create a Decode error with a descriptive message
    pub fn decode(encoding: TextEncoding, message: impl Into<String>) -> Self {
        Self::Decode {
            encoding,
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to BinfileError
impl From<std::io::Error> for BinfileError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                // For NotFound the path context is lost here; call sites that
                // have it should construct FileNotFound directly
                Self::Io {
                    message: "File not found".to_string(),
                    source: err,
                }
            }
            std::io::ErrorKind::PermissionDenied => Self::Io {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::Io {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}
