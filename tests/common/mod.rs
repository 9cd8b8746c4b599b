//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const HEADING: &str = "سُورَةُ";
pub const BASMALA: &str = "بِسْمِ اِ۬للَّهِ اِ۬لرَّحْمَٰنِ اِ۬لرَّحِيمِ";

/// A two-chapter corpus with front matter, a basmala and a verse split across lines.
pub fn sample_corpus() -> String {
    format!(
        "مقدمة النسخة\n\n{HEADING} الفاتحة\n{BASMALA}\nاَ۬لْحَمْدُ لِلَّهِ رَبِّ اِ۬لْعَٰلَمِينَ ١ اَ۬لرَّحْمَٰنِ\nاِ۬لرَّحِيمِ ٢\n\n{HEADING} البقرة\nالٓمٓ ١ ذَٰلِكَ اَ۬لْكِتَٰبُ ٢\n"
    )
}

/// Encodes text as UTF-16 little-endian with a byte-order mark.
pub fn utf16_le_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

/// Writes `text` as a UTF-16 file inside `dir` and returns its path.
pub fn write_corpus(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, utf16_le_bom(text)).unwrap();
    path
}

/// Reads a UTF-8 file, asserting and stripping its byte-order mark.
pub fn read_bom_json(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF], "output must start with a UTF-8 BOM");
    String::from_utf8(bytes[3..].to_vec()).unwrap()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
