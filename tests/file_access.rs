use std::path::PathBuf;
use tempfile::TempDir;

use binfile::{align, create, dummy, length, open, read_all, read_string};
use binfile::{BinfileError, TextEncoding};

fn scratch_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    // surface the library's warn-level diagnostics under RUST_LOG
    let _ = env_logger::builder().is_test(true).try_init();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write scratch file");
    path
}

#[test]
fn read_write_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "data.bin", &[0u8; 64]);
    let mut accessor = open(&path).expect("open scratch file");

    let payload = *b"round trip payload";
    accessor.write_at(17, &payload).unwrap();

    let mut readback = [0u8; 18];
    let count = accessor.read_at(17, &mut readback).unwrap();
    assert_eq!(count, payload.len());
    assert_eq!(readback, payload);
}

#[test]
fn write_past_eof_extends_with_zeros() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "data.bin", b"seed");
    let mut accessor = open(&path).unwrap();

    accessor.write_at(10, b"tail").unwrap();
    let contents = read_all(&path).unwrap();
    assert_eq!(contents.len(), 14);
    assert_eq!(&contents[..4], b"seed");
    assert!(contents[4..10].iter().all(|&b| b == 0));
    assert_eq!(&contents[10..], b"tail");
}

#[test]
fn dummy_creates_zero_filled_file_of_exact_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pad.bin");

    dummy(4096, &path).unwrap();
    assert_eq!(length(&path).unwrap(), 4096);
    assert!(read_all(&path).unwrap().iter().all(|&b| b == 0));
}

#[test]
fn create_round_trips_and_scrubs_the_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.bin");
    let mut buffer = *b"sensitive payload";

    let accessor = create(&mut buffer, true, &path).unwrap();
    drop(accessor);

    assert_eq!(read_all(&path).unwrap(), b"sensitive payload");
    assert!(buffer.iter().all(|&b| b == 0));
}

#[test]
fn print_default_offset_appends_sequentially() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "log.bin", b"");

    let mut accessor = open(&path).unwrap();
    accessor.print("AB").unwrap();
    accessor.print("CD").unwrap();

    assert_eq!(read_all(&path).unwrap(), b"ABCD");
}

#[test]
fn print_at_overwrites_and_extends_in_one_write() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "data.bin", b"0123456789");
    let mut accessor = open(&path).unwrap();

    // region starts inside the file and runs past its end
    accessor.print_at(8, "INJECTED").unwrap();
    assert_eq!(read_all(&path).unwrap(), b"01234567INJECTED");
}

#[test]
fn print_and_read_string_round_trip_every_encoding() {
    let dir = TempDir::new().unwrap();
    let text = "grüße, 世界";

    for encoding in [
        TextEncoding::Utf8,
        TextEncoding::Utf16,
        TextEncoding::Utf32,
        TextEncoding::Utf7,
    ] {
        let path = scratch_file(&dir, "text.bin", b"");
        let mut accessor = open(&path).unwrap();
        accessor.print_encoded(encoding, text).unwrap();
        drop(accessor);

        assert_eq!(
            read_string(encoding, &path).unwrap(),
            text,
            "round trip failed for {encoding}"
        );
    }
}

#[test]
fn open_missing_path_fails_without_a_handle() {
    let dir = TempDir::new().unwrap();
    let result = open(dir.path().join("absent.bin"));
    assert!(matches!(result, Err(BinfileError::FileNotFound { .. })));
}

#[test]
fn align_pads_and_stays_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "track.bin", &[0x7Fu8; 2500]);

    align(2048, &path).unwrap();
    assert_eq!(length(&path).unwrap(), 4096);
    let contents = read_all(&path).unwrap();
    assert_eq!(&contents[..2500], &[0x7Fu8; 2500][..]);
    assert!(contents[2500..].iter().all(|&b| b == 0));

    align(2048, &path).unwrap();
    assert_eq!(length(&path).unwrap(), 4096);
}

#[test]
fn align_rejects_zero_sector() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "track.bin", b"abc");
    assert!(matches!(align(0, &path), Err(BinfileError::ZeroSector)));
}

#[cfg(unix)]
#[test]
fn write_refused_on_read_only_file_leaves_bytes_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "frozen.bin", b"original");
    let mut accessor = open(&path).unwrap();

    // flip the attribute after the handle is open; the next guard check
    // observes it
    let mut permissions = std::fs::metadata(&path).unwrap().permissions();
    permissions.set_readonly(true);
    std::fs::set_permissions(&path, permissions).unwrap();

    let result = accessor.write_at(0, b"clobber!");
    assert!(matches!(result, Err(BinfileError::ReadOnly { .. })));

    let result = accessor.print("clobber!");
    assert!(matches!(result, Err(BinfileError::ReadOnly { .. })));

    // reads stay valid on a read-only file
    let mut buf = [0u8; 8];
    assert_eq!(accessor.read_at(0, &mut buf).unwrap(), 8);
    assert_eq!(&buf, b"original");

    let mut permissions = std::fs::metadata(&path).unwrap().permissions();
    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(false);
    std::fs::set_permissions(&path, permissions).unwrap();
    assert_eq!(read_all(&path).unwrap(), b"original");
}

#[test]
fn read_string_of_empty_file_reports_empty_buffer() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "empty.bin", b"");
    let result = read_string(TextEncoding::Ascii, &path);
    assert!(matches!(result, Err(BinfileError::EmptyBuffer)));
}

#[test]
fn length_by_path_matches_written_size() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "data.bin", &[1u8; 777]);
    assert_eq!(length(&path).unwrap(), 777);
}
