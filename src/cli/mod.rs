//! The Warsh transformer command-line interface.
//!
//! Owns every side effect of a run: logger setup, reading and decoding the
//! source file, and writing the JSON document. The conversion itself is the
//! pure [`crate::converter::convert_with`].

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;
use log::{info, LevelFilter};

use crate::cli::args::WarshArgs;
use crate::converter::{convert_with, ConvertOptions};
use crate::diagnostics::{print_error, ConvertError};
use crate::encoding::decode_utf16;
use crate::model::Document;
use crate::output::write_document;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = WarshArgs::parse();
    init_logging(args.log_level());

    match execute(&args) {
        Ok(document) => {
            let destination = (!args.check).then(|| args.output_path());
            output::print_summary(&document, destination.as_deref());
        }
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

/// Runs the full pipeline for parsed arguments: read, convert, write.
///
/// The output file is only touched once conversion has succeeded.
pub fn execute(args: &WarshArgs) -> Result<Document, ConvertError> {
    let source = read_source(&args.input)?;
    let options = ConvertOptions {
        normalize: args.normalize,
    };
    let document = convert_with(&source, &options)?;

    if args.check {
        info!(
            "validated {} chapters ({} verses); nothing written",
            document.chapter_count(),
            document.verse_count()
        );
        return Ok(document);
    }

    let destination = args.output_path();
    let written = write_document(&destination, &document)?;
    info!(
        "wrote {} chapters ({} verses, {written} bytes) to {}",
        document.chapter_count(),
        document.verse_count(),
        destination.display()
    );
    Ok(document)
}

/// Reads and decodes the UTF-16 source file.
pub fn read_source(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("read {} bytes from {}", bytes.len(), path.display());
    decode_utf16(&bytes).map_err(|e| e.at_path(path))
}

fn init_logging(level: LevelFilter) {
    // try_init: a logger may already be installed when embedded in tests.
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_secs()
        .try_init();
}
