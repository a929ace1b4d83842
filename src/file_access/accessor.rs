//! The validated file accessor handle.
//!
//! [`FileAccessor`] wraps one open file and exposes offset-addressable
//! read/write/print operations over it. Every transfer operation re-runs the
//! guard check against the file's current attributes before seeking, so
//! attribute changes made after the handle was opened are honored on the
//! next call. The underlying file closes when the handle drops.

use crate::encoding::TextEncoding;
use crate::error::{BinfileError, Result};
use crate::file_access::guard;
use log::warn;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Offset-addressable access to a single open file.
///
/// Handles are produced by [`open`](crate::file_access::factory::open) and
/// [`create`](crate::file_access::factory::create); both open the file for
/// reading and writing, so readability and seekability are properties of the
/// type rather than run-time preconditions.
#[derive(Debug)]
pub struct FileAccessor {
    file: File,
    path: PathBuf,
}

impl FileAccessor {
    pub(crate) fn new(file: File, path: PathBuf) -> Self {
        Self { file, path }
    }

    /// Path this handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current byte length of the file, straight from metadata.
    ///
    /// No guard check runs for a plain size query.
    pub fn len(&self) -> Result<u64> {
        let metadata = self.file.metadata().map_err(|e| {
            BinfileError::io(format!("Failed to read metadata for {}", self.path.display()), e)
        })?;
        Ok(metadata.len())
    }

    /// Whether the file currently holds zero bytes.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Read bytes at `offset` into `buf`, filling from the front.
    ///
    /// Returns the number of bytes actually read, which is less than
    /// `buf.len()` only when end of file is reached first. The file cursor
    /// ends at `offset` plus the returned count.
    pub fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        guard::check_access(&self.path)?;
        if buf.is_empty() {
            warn!("attempting to read into an empty buffer, aborting");
            return Err(BinfileError::EmptyBuffer);
        }
        self.seek_to(offset)?;

        let mut filled = 0;
        while filled < buf.len() {
            match self.file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(BinfileError::io(
                        format!("Failed to read from {}", self.path.display()),
                        e,
                    ))
                }
            }
        }
        Ok(filled)
    }

    /// Write `buf` at `offset`.
    ///
    /// A write that runs past the current end of file extends it; no
    /// truncation ever occurs. Refused with [`BinfileError::ReadOnly`] when
    /// the guard check observes the read-only attribute. Returns the byte
    /// count written, equal to `buf.len()` on success.
    pub fn write_at(&mut self, offset: u64, buf: &[u8]) -> Result<u64> {
        let grant = guard::check_access(&self.path)?;
        if buf.is_empty() {
            warn!("attempting to write from an empty buffer, aborting");
            return Err(BinfileError::EmptyBuffer);
        }
        if grant.read_only() {
            warn!(
                "attempting to write to read-only file {}, aborting",
                self.path.display()
            );
            return Err(BinfileError::ReadOnly {
                path: self.path.clone(),
            });
        }
        self.seek_to(offset)?;
        self.file.write_all(buf).map_err(|e| {
            BinfileError::io(format!("Failed to write to {}", self.path.display()), e)
        })?;
        Ok(buf.len() as u64)
    }

    /// Copy the unread remainder of the file, from the current cursor to end
    /// of file, into a fresh buffer.
    pub fn remaining_bytes(&mut self) -> Result<Vec<u8>> {
        guard::check_access(&self.path)?;
        let mut contents = Vec::new();
        self.file.read_to_end(&mut contents).map_err(|e| {
            BinfileError::io(format!("Failed to read {}", self.path.display()), e)
        })?;
        Ok(contents)
    }

    /// Write `text` at `offset` in the given encoding.
    ///
    /// The written region is exactly the encoded byte length; no terminator
    /// is appended. Writing past end of file extends the file, so the whole
    /// string always lands. Encoding failures and write refusals both surface
    /// as errors.
    pub fn print_encoded_at(
        &mut self,
        offset: u64,
        encoding: TextEncoding,
        text: &str,
    ) -> Result<()> {
        guard::check_access(&self.path)?;
        let encoded = encoding.encode(text)?;
        self.write_at(offset, &encoded)?;
        Ok(())
    }

    /// Write `text` in the given encoding at the current end of file.
    ///
    /// The target offset is the file length at call time, so repeated calls
    /// append sequentially.
    pub fn print_encoded(&mut self, encoding: TextEncoding, text: &str) -> Result<()> {
        let offset = self.len()?;
        self.print_encoded_at(offset, encoding, text)
    }

    /// Write ASCII `text` at `offset`.
    pub fn print_at(&mut self, offset: u64, text: &str) -> Result<()> {
        self.print_encoded_at(offset, TextEncoding::Ascii, text)
    }

    /// Append ASCII `text` at the current end of file.
    pub fn print(&mut self, text: &str) -> Result<()> {
        let offset = self.len()?;
        self.print_encoded_at(offset, TextEncoding::Ascii, text)
    }

    fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset)).map_err(|e| {
            BinfileError::io(
                format!("Failed to seek {} to offset {offset}", self.path.display()),
                e,
            )
        })?;
        Ok(())
    }
}
