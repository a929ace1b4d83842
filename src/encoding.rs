//! Text encodings for string injection and extraction.
//!
//! This module provides the codec dispatch used by the print and
//! string-extraction operations. Each [`TextEncoding`] variant maps text to
//! the exact byte sequence written to a file and back again.
//!
//! All codecs are strict: text that cannot be represented in the requested
//! encoding fails with a typed [`Encode`](crate::BinfileError::Encode) error,
//! and byte sequences that are not valid in the requested encoding fail with
//! a typed [`Decode`](crate::BinfileError::Decode) error. Nothing is silently
//! replaced or dropped, so `decode(encode(text))` reproduces `text` exactly
//! for every accepted input.

mod utf7;

use crate::error::{BinfileError, Result};
use std::fmt;

/// Supported text encodings for print and string-extraction operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Seven-bit ASCII; rejects anything outside `0x00..=0x7F`
    Ascii,
    /// UTF-8 without a byte order mark
    Utf8,
    /// UTF-16 little-endian without a byte order mark
    Utf16,
    /// UTF-32 little-endian without a byte order mark
    Utf32,
    /// RFC 2152 UTF-7 with modified-base64 runs
    Utf7,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ascii => "ASCII",
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
            Self::Utf32 => "UTF-32",
            Self::Utf7 => "UTF-7",
        };
        f.write_str(name)
    }
}

impl TextEncoding {
    /// Encode `text` into the byte sequence this encoding writes to disk.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Ascii => {
                if !text.is_ascii() {
                    return Err(BinfileError::encode(
                        self,
                        "text contains non-ASCII characters",
                    ));
                }
                Ok(text.as_bytes().to_vec())
            }
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf16 => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Self::Utf32 => Ok(text
                .chars()
                .flat_map(|c| (c as u32).to_le_bytes())
                .collect()),
            Self::Utf7 => Ok(utf7::encode(text)),
        }
    }

    /// Decode a byte sequence previously produced by this encoding.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Ascii => {
                if !bytes.is_ascii() {
                    return Err(BinfileError::decode(self, "byte value above 0x7F"));
                }
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
            Self::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| BinfileError::decode(self, e.to_string())),
            Self::Utf16 => {
                if bytes.len() % 2 != 0 {
                    return Err(BinfileError::decode(
                        self,
                        "byte length is not a multiple of two",
                    ));
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units)
                    .map_err(|_| BinfileError::decode(self, "unpaired surrogate"))
            }
            Self::Utf32 => {
                if bytes.len() % 4 != 0 {
                    return Err(BinfileError::decode(
                        self,
                        "byte length is not a multiple of four",
                    ));
                }
                bytes
                    .chunks_exact(4)
                    .map(|quad| {
                        let value = u32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]]);
                        char::from_u32(value).ok_or_else(|| {
                            BinfileError::decode(
                                self,
                                format!("invalid scalar value 0x{value:08X}"),
                            )
                        })
                    })
                    .collect()
            }
            Self::Utf7 => utf7::decode(bytes),
        }
    }
}
