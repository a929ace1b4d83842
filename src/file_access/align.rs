//! Sector alignment padding.
//!
//! Media such as optical discs and some SD layouts require every file's data
//! size to be a multiple of the device sector size. [`align`] pads a file up
//! to the next sector boundary with zeros.

use crate::error::{BinfileError, Result};
use crate::file_access::factory;
use log::warn;
use std::path::Path;

/// Pad the file at `path` with zeros up to the next multiple of `sector`.
///
/// The padding is produced by writing a single zero byte at the last
/// position of the aligned length and letting the write extend the file;
/// every intervening byte reads back as zero. When the length is already a
/// multiple of `sector` the write lands on the final existing byte and
/// zeroes it, leaving the length unchanged. An empty file is on every sector
/// boundary and is left untouched. Idempotent on length: a second call never
/// grows the file further.
pub fn align(sector: u64, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if sector == 0 {
        warn!("sector size of zero for {}, aborting", path.display());
        return Err(BinfileError::ZeroSector);
    }

    let mut accessor = factory::open(path)?;
    let length = accessor.len()?;
    let aligned = length.div_ceil(sector) * sector;
    if aligned == 0 {
        return Ok(());
    }
    accessor.write_at(aligned - 1, &[0u8])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch_file(dir: &TempDir, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join("data.bin");
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn test_align_pads_to_next_boundary() {
        let dir = TempDir::new().unwrap();
        let path = scratch_file(&dir, b"12345");

        align(16, &path).unwrap();
        let contents = std::fs::read(&path).unwrap();
        assert_eq!(contents.len(), 16);
        assert_eq!(&contents[..5], b"12345");
        assert!(contents[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_align_is_idempotent_on_length() {
        let dir = TempDir::new().unwrap();
        let path = scratch_file(&dir, &[0x55u8; 100]);

        align(64, &path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 128);
        align(64, &path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 128);
    }

    #[test]
    fn test_align_already_aligned_keeps_length() {
        let dir = TempDir::new().unwrap();
        let path = scratch_file(&dir, &[0x55u8; 32]);

        align(16, &path).unwrap();
        let contents = std::fs::read(&path).unwrap();
        assert_eq!(contents.len(), 32);
        // the pad write lands on the final byte of the aligned region
        assert_eq!(contents[31], 0);
        assert!(contents[..31].iter().all(|&b| b == 0x55));
    }

    #[test]
    fn test_align_empty_file_is_untouched() {
        let dir = TempDir::new().unwrap();
        let path = scratch_file(&dir, b"");

        align(2048, &path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_align_sector_of_one_never_pads() {
        let dir = TempDir::new().unwrap();
        let path = scratch_file(&dir, b"abc");

        align(1, &path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 3);
    }

    #[test]
    fn test_align_zero_sector_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = scratch_file(&dir, b"abc");

        assert!(matches!(align(0, &path), Err(BinfileError::ZeroSector)));
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn test_align_missing_file_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let result = align(512, dir.path().join("absent.bin"));
        assert!(matches!(result, Err(BinfileError::FileNotFound { .. })));
    }
}
