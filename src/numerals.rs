//! Eastern Arabic verse markers (U+0660..=U+0669).

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more consecutive Eastern Arabic digits.
pub static VERSE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{0660}-\u{0669}]+").expect("verse marker pattern is valid")
});

const EASTERN_ZERO: u32 = 0x0660;

/// Maps a single Eastern Arabic digit to its value.
pub fn eastern_digit(c: char) -> Option<u32> {
    match c {
        '\u{0660}'..='\u{0669}' => Some(c as u32 - EASTERN_ZERO),
        _ => None,
    }
}

/// Replaces each Eastern Arabic digit with its Western counterpart.
pub fn to_western(numeral: &str) -> String {
    numeral
        .chars()
        .map(|c| match eastern_digit(c) {
            Some(d) => char::from_digit(d, 10).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Decimal rendering of an Eastern numeral with leading zeros removed, at any
/// magnitude. Used when reporting markers that may not fit an integer.
pub fn decimal_text(numeral: &str) -> String {
    let western = to_western(numeral);
    match western.trim_start_matches('0') {
        "" if !western.is_empty() => "0".to_string(),
        digits => digits.to_string(),
    }
}

/// Parses a run of Eastern Arabic digits as a verse number.
///
/// Returns `None` when the input is empty, holds anything but Eastern digits,
/// or does not fit a `u32`.
pub fn parse_eastern(numeral: &str) -> Option<u32> {
    if numeral.is_empty() || !numeral.chars().all(|c| eastern_digit(c).is_some()) {
        return None;
    }
    to_western(numeral).parse().ok()
}
