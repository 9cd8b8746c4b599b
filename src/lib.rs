pub use crate::converter::{convert, convert_with, ConvertOptions};
pub use crate::diagnostics::{ConvertError, ErrorType};
pub use crate::model::{Document, Verse};

pub mod cli;
pub mod converter;
pub mod diagnostics;
pub mod encoding;
pub mod model;
pub mod normalize;
pub mod numerals;
pub mod output;
