//! Corpus converter: source text to a chapter-keyed verse [`Document`].
//!
//! The conversion is a pure, single pass over the text. Chapters are delimited
//! by the surah heading token, verses by runs of Eastern Arabic numerals that
//! close each verse. No I/O happens here.

use std::borrow::Cow;

use log::{debug, warn};
use miette::SourceSpan;

use crate::diagnostics::{chapter_source, ConvertError};
use crate::model::{Document, Verse};
use crate::normalize::normalize_text;
use crate::numerals::{decimal_text, parse_eastern, VERSE_MARKER};

/// Token that opens every chapter section.
pub const CHAPTER_HEADING: &str = "سُورَةُ";

/// Prefix of the opening phrase recorded as verse 0.
pub const OPENING_PHRASE: &str = "بِسْمِ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Fill [`Verse::normalized`] with the search-normalized text.
    pub normalize: bool,
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Converts the full corpus with default options.
pub fn convert(source_text: &str) -> Result<Document, ConvertError> {
    convert_with(source_text, &ConvertOptions::default())
}

/// Converts the full corpus.
///
/// Text before the first heading is front matter and is dropped. A chapter that
/// contains no non-empty line produces no entry, but still consumes its index.
/// `\r\n` and lone `\r` line endings are treated as `\n`.
pub fn convert_with(source_text: &str, options: &ConvertOptions) -> Result<Document, ConvertError> {
    let mut document = Document::new();
    let source = normalize_newlines(source_text);

    for (position, section) in strip(&source).split(CHAPTER_HEADING).skip(1).enumerate() {
        let chapter = chapter_number(position);
        match convert_chapter(chapter, section, options)? {
            Some(verses) => document.insert_chapter(chapter, verses),
            None => warn!("chapter {chapter} has no content, skipping"),
        }
    }

    Ok(document)
}

// ============================================================================
// TEXT HELPERS
// ============================================================================

/// Rewrites `\r\n` and lone `\r` as `\n`, borrowing when there is nothing to do.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Whitespace as far as line and verse trimming is concerned: Unicode
/// White_Space plus the ASCII information separators U+001C..=U+001F.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

fn strip(text: &str) -> &str {
    text.trim_matches(is_blank)
}

// ============================================================================
// CHAPTER PROCESSING
// ============================================================================

fn chapter_number(position: usize) -> u32 {
    u32::try_from(position + 1).unwrap_or(u32::MAX)
}

fn convert_chapter(
    chapter: u32,
    section: &str,
    options: &ConvertOptions,
) -> Result<Option<Vec<Verse>>, ConvertError> {
    let lines: Vec<&str> = section
        .split('\n')
        .map(strip)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((title, mut body)) = lines.split_first() else {
        return Ok(None);
    };

    let mut verses = Vec::new();

    if let Some((first, rest)) = body.split_first() {
        if first.starts_with(OPENING_PHRASE) {
            verses.push(make_verse(chapter, 0, first, options));
            body = rest;
        }
    }

    let joined = body.join(" ");
    let mut expected: u32 = 1;
    let mut verse_start = 0;

    for marker in VERSE_MARKER.find_iter(&joined) {
        if parse_eastern(marker.as_str()) != Some(expected) {
            return Err(ConvertError::SequenceMismatch {
                chapter,
                expected,
                found: decimal_text(marker.as_str()),
                source_code: chapter_source(chapter, &joined),
                span: SourceSpan::from((marker.start(), marker.len())),
            });
        }

        let text = strip(&joined[verse_start..marker.start()]);
        verses.push(make_verse(chapter, expected, text, options));
        verse_start = marker.end();
        expected += 1;
    }

    debug!(
        "chapter {chapter} ({title}): {} numbered verses{}",
        expected - 1,
        if verses.first().is_some_and(|v| v.verse == 0) {
            " + opening phrase"
        } else {
            ""
        }
    );

    Ok(Some(verses))
}

fn make_verse(chapter: u32, verse: u32, text: &str, options: &ConvertOptions) -> Verse {
    let mut record = Verse::new(chapter, verse, text);
    if options.normalize {
        record.normalized = Some(normalize_text(text));
    }
    record
}
