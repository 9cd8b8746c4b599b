//! Parsed corpus types.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// A single verse record as emitted in the output document.
///
/// Verse `0` is reserved for the opening phrase of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    /// Search-normalized text, only present when normalization is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

impl Verse {
    pub fn new(chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            chapter,
            verse,
            text: text.into(),
            normalized: None,
        }
    }
}

/// The converted corpus: chapter number to its ordered verses.
///
/// Chapters are keyed numerically so iteration and serialization follow source
/// order; keys serialize as JSON strings (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    chapters: BTreeMap<u32, Vec<Verse>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_chapter(&mut self, chapter: u32, verses: Vec<Verse>) {
        self.chapters.insert(chapter, verses);
    }

    pub fn chapter(&self, chapter: u32) -> Option<&[Verse]> {
        self.chapters.get(&chapter).map(Vec::as_slice)
    }

    pub fn chapters(&self) -> impl Iterator<Item = (u32, &[Verse])> {
        self.chapters.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // serde_json already stringifies integer map keys; this keeps the
        // wrapper transparent.
        self.chapters.serialize(serializer)
    }
}
