//! RFC 2152 UTF-7 codec.
//!
//! Direct characters pass through unchanged, `+` escapes as `+-`, and every
//! other character travels inside a `+...-` run of modified base64 (no `=`
//! padding) over the UTF-16 big-endian code units. The encoder always closes
//! a run with an explicit `-`; the decoder also accepts runs terminated by
//! any non-base64 character, as the RFC permits.

use crate::encoding::TextEncoding;
use crate::error::{BinfileError, Result};

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Characters allowed outside a base64 run: RFC 2152 set D plus space, tab,
/// carriage return and line feed.
fn is_direct(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '\'' | '(' | ')' | ',' | '-' | '.' | '/' | ':' | '?' | ' ' | '\t' | '\r' | '\n'
        )
}

fn base64_value(b: u8) -> Option<u32> {
    match b {
        b'A'..=b'Z' => Some(u32::from(b - b'A')),
        b'a'..=b'z' => Some(u32::from(b - b'a') + 26),
        b'0'..=b'9' => Some(u32::from(b - b'0') + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Encode `text` as UTF-7. Infallible: every string has a representation.
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut pending: Vec<u16> = Vec::new();
    for c in text.chars() {
        if c == '+' {
            flush_run(&mut out, &mut pending);
            out.extend_from_slice(b"+-");
        } else if is_direct(c) {
            flush_run(&mut out, &mut pending);
            out.push(c as u8);
        } else {
            let mut units = [0u16; 2];
            pending.extend_from_slice(c.encode_utf16(&mut units));
        }
    }
    flush_run(&mut out, &mut pending);
    out
}

/// Emit the pending UTF-16 code units as a `+...-` base64 run.
fn flush_run(out: &mut Vec<u8>, pending: &mut Vec<u16>) {
    if pending.is_empty() {
        return;
    }
    out.push(b'+');
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for unit in pending.drain(..) {
        acc = (acc << 16) | u32::from(unit);
        bits += 16;
        while bits >= 6 {
            bits -= 6;
            out.push(BASE64[((acc >> bits) & 0x3F) as usize]);
        }
    }
    if bits > 0 {
        // left-justify the leftover bits, zero-padded to a full sextet
        out.push(BASE64[((acc << (6 - bits)) & 0x3F) as usize]);
    }
    out.push(b'-');
}

/// Decode a UTF-7 byte sequence.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b > 0x7F {
            return Err(BinfileError::decode(
                TextEncoding::Utf7,
                format!("non-ASCII byte 0x{b:02X} outside a base64 run"),
            ));
        }
        if b != b'+' {
            out.push(b as char);
            i += 1;
            continue;
        }

        // escape or base64 run
        i += 1;
        if bytes.get(i) == Some(&b'-') {
            out.push('+');
            i += 1;
            continue;
        }

        let mut acc: u32 = 0;
        let mut bits = 0u32;
        let mut units: Vec<u16> = Vec::new();
        let run_start = i;
        while i < bytes.len() {
            let Some(value) = base64_value(bytes[i]) else {
                break;
            };
            acc = (acc << 6) | value;
            bits += 6;
            if bits >= 16 {
                bits -= 16;
                units.push(((acc >> bits) & 0xFFFF) as u16);
            }
            i += 1;
        }
        if i == run_start {
            return Err(BinfileError::decode(
                TextEncoding::Utf7,
                "'+' not followed by base64 data or '-'",
            ));
        }
        if acc & ((1 << bits) - 1) != 0 {
            return Err(BinfileError::decode(
                TextEncoding::Utf7,
                "nonzero padding bits at end of base64 run",
            ));
        }
        let run = String::from_utf16(&units).map_err(|_| {
            BinfileError::decode(TextEncoding::Utf7, "unpaired surrogate in base64 run")
        })?;
        out.push_str(&run);
        if bytes.get(i) == Some(&b'-') {
            i += 1;
        }
    }
    Ok(out)
}
