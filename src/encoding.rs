//! Byte-level encodings at the file boundary.
//!
//! The source transcription is stored as UTF-16 with a byte-order mark; the
//! generated JSON is UTF-8 prefixed with a BOM so downstream tooling on Windows
//! picks the right encoding.

use std::path::PathBuf;

use crate::diagnostics::ConvertError;

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

/// Detects the byte order from a leading BOM. Returns the order and the
/// remaining payload; input without a BOM is read as little-endian.
pub fn detect_bom(bytes: &[u8]) -> (Endianness, &[u8]) {
    match bytes {
        [a, b, rest @ ..] if [*a, *b] == UTF16_LE_BOM => (Endianness::Little, rest),
        [a, b, rest @ ..] if [*a, *b] == UTF16_BE_BOM => (Endianness::Big, rest),
        _ => (Endianness::Little, bytes),
    }
}

/// Decodes UTF-16 bytes, honouring a leading byte-order mark.
///
/// The returned error carries an empty path; callers that know the file
/// attach it with [`ConvertError::at_path`].
pub fn decode_utf16(bytes: &[u8]) -> Result<String, ConvertError> {
    let (order, payload) = detect_bom(bytes);

    if payload.len() % 2 != 0 {
        return Err(encoding_error(format!(
            "truncated data: {} bytes is not a whole number of UTF-16 code units",
            payload.len()
        )));
    }

    let units = payload.chunks_exact(2).map(|pair| match order {
        Endianness::Little => u16::from_le_bytes([pair[0], pair[1]]),
        Endianness::Big => u16::from_be_bytes([pair[0], pair[1]]),
    });

    char::decode_utf16(units)
        .enumerate()
        .map(|(index, unit)| {
            unit.map_err(|e| {
                encoding_error(format!(
                    "unpaired surrogate 0x{:04X} at code unit {index}",
                    e.unpaired_surrogate()
                ))
            })
        })
        .collect()
}

/// Encodes text as UTF-8 with a leading byte-order mark.
pub fn encode_utf8_bom(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
    bytes.extend_from_slice(&UTF8_BOM);
    bytes.extend_from_slice(text.as_bytes());
    bytes
}

fn encoding_error(message: String) -> ConvertError {
    ConvertError::Encoding {
        path: PathBuf::new(),
        message,
    }
}
