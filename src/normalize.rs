//! Search normalization for Arabic verse text.
//!
//! Strips harakat and every non-letter so verses can be matched against plain
//! user input. The canonical decomposition step splits composed hamza and madda
//! letters (e.g. `أ` into `ا` + U+0654) so that only the base letter survives.

use unicode_normalization::UnicodeNormalization;

const HARAKAT: std::ops::RangeInclusive<char> = '\u{064B}'..='\u{0652}';
const ARABIC_LETTERS: std::ops::RangeInclusive<char> = '\u{0621}'..='\u{064A}';

pub fn normalize_text(text: &str) -> String {
    let letters: String = text
        .nfd()
        .filter(|c| !HARAKAT.contains(c))
        .filter(|c| ARABIC_LETTERS.contains(c) || c.is_whitespace())
        .collect();

    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}
