//! JSON rendering and the final file write.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::diagnostics::ConvertError;
use crate::encoding::encode_utf8_bom;
use crate::model::Document;

const INDENT: &[u8] = b"    ";

/// Renders the document as 4-space indented JSON without a trailing newline.
/// Non-ASCII text is written as-is rather than `\u` escaped.
pub fn render_json(document: &Document) -> Result<String, ConvertError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut serializer)
        .map_err(|source| ConvertError::Serialize { source })?;

    // serde_json only ever emits valid UTF-8.
    String::from_utf8(buffer).map_err(|e| ConvertError::Serialize {
        source: <serde_json::Error as serde::ser::Error>::custom(e),
    })
}

/// Writes the document as UTF-8 JSON with a byte-order mark, replacing any
/// existing file. Returns the number of bytes written.
pub fn write_document(path: &Path, document: &Document) -> Result<usize, ConvertError> {
    let bytes = encode_utf8_bom(&render_json(document)?);
    fs::write(path, &bytes).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}
