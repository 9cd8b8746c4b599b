//! Unified, `miette`-based diagnostics for the Warsh transformer.
//!
//! Every failure the pipeline can produce is a [`ConvertError`]. Only
//! [`ConvertError::SequenceMismatch`] originates in the pure converter; the
//! remaining variants belong to the file-system boundary (reading, decoding,
//! rendering and writing).
//!
//! Sequence mismatches carry the space-joined chapter text as a named source so
//! the rendered report points straight at the offending numeral.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use thiserror::Error;

pub type SourceArc = Arc<NamedSource<String>>;

/// Coarse classification of a [`ConvertError`], handy for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Verse numbering broke continuity inside a chapter
    Sequence,
    /// The input or output file could not be accessed
    Io,
    /// The input bytes were not valid UTF-16
    Encoding,
    /// The document could not be rendered as JSON
    Serialize,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Sequence => "Sequence",
            ErrorType::Io => "Io",
            ErrorType::Encoding => "Encoding",
            ErrorType::Serialize => "Serialize",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Mismatch in chapter {chapter}: Expected verse {expected}, found {found}")]
    SequenceMismatch {
        chapter: u32,
        expected: u32,
        /// Decimal value of the offending marker, as written.
        found: String,
        source_code: SourceArc,
        span: SourceSpan,
    },
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Encoding error in '{}': {message}", path.display())]
    Encoding { path: PathBuf, message: String },
    #[error("Failed to render JSON: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    pub fn error_type(&self) -> ErrorType {
        match self {
            ConvertError::SequenceMismatch { .. } => ErrorType::Sequence,
            ConvertError::Io { .. } => ErrorType::Io,
            ConvertError::Encoding { .. } => ErrorType::Encoding,
            ConvertError::Serialize { .. } => ErrorType::Serialize,
        }
    }

    /// Attaches a path to an encoding error raised before the path was known.
    pub fn at_path(self, at: impl Into<PathBuf>) -> Self {
        match self {
            ConvertError::Encoding { message, .. } => ConvertError::Encoding {
                path: at.into(),
                message,
            },
            other => other,
        }
    }
}

impl Diagnostic for ConvertError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            ConvertError::SequenceMismatch { .. } => "warsh::sequence",
            ConvertError::Io { .. } => "warsh::io",
            ConvertError::Encoding { .. } => "warsh::encoding",
            ConvertError::Serialize { .. } => "warsh::serialize",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let help = match self {
            ConvertError::SequenceMismatch { expected, .. } => format!(
                "verse markers must count up from 1 without gaps; look for a missing or mistyped marker near verse {expected}"
            ),
            ConvertError::Io { .. } => "check that the path exists and is accessible".to_string(),
            ConvertError::Encoding { .. } => {
                "the source text must be saved as UTF-16 (preferably with a byte-order mark)"
                    .to_string()
            }
            ConvertError::Serialize { .. } => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            ConvertError::SequenceMismatch { source_code, .. } => {
                Some(source_code.as_ref() as &dyn SourceCode)
            }
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            ConvertError::SequenceMismatch { expected, span, .. } => {
                let label = LabeledSpan::new_with_span(
                    Some(format!("expected verse {expected} here")),
                    *span,
                );
                Some(Box::new(std::iter::once(label)))
            }
            _ => None,
        }
    }
}

/// Wraps chapter text into a named source for error reporting.
pub fn chapter_source<S: AsRef<str>>(chapter: u32, text: S) -> SourceArc {
    Arc::new(NamedSource::new(
        format!("chapter {chapter}"),
        text.as_ref().to_string(),
    ))
}

/// Renders an error through miette on stderr.
pub fn print_error(error: ConvertError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
