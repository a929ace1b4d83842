//! # binfile - Validated Binary File Access
//!
//! A small access layer that treats a single file as a randomly-addressable
//! byte store with guardrails. Every operation runs a pre-flight guard check
//! against the file's current attributes (read-only, compressed, encrypted,
//! offline, directory) before touching bytes, and writes past end of file
//! extend it automatically.
//!
//! ## Features
//!
//! - **Guarded I/O**: unsafe targets are refused before any seek happens
//! - **Offset addressing**: read and write anywhere, including past EOF
//! - **Encoded text injection**: print strings in ASCII, UTF-8, UTF-16,
//!   UTF-32 or UTF-7 at arbitrary offsets
//! - **Sector alignment**: pad a file's size up to a device sector boundary
//! - **No panics**: every failure is a typed [`BinfileError`] value
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`encoding`] - Text codec dispatch for print and extraction
//! - [`file_access`] - Guard check, handles, transfers, alignment

// Core modules
pub mod encoding;
pub mod error;
pub mod file_access;

// Re-export commonly used types for convenience
pub use error::{BinfileError, Result};

// Public API surface for external usage
pub use encoding::TextEncoding;
pub use file_access::{
    align, create, dummy, length, open, read_all, read_string, FileAccessor,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
