//! Defines the command-line arguments for the Warsh transformer.
//!
//! Every flag has a default, so a bare invocation converts the fixed corpus
//! file in the working directory.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Base name of the corpus file the tool is built around.
pub const DEFAULT_BASENAME: &str = "UthmanicWarsh1 Ver05";

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "warsh-transform",
    version,
    about = "Convert the Uthmanic Warsh transcription into chapter-keyed verse JSON."
)]
pub struct WarshArgs {
    /// UTF-16 source text to convert.
    #[arg(short, long, default_value_os_t = default_input())]
    pub input: PathBuf,

    /// Destination JSON file. Defaults to the input path with a `.json` extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add a search-normalized copy of each verse's text.
    #[arg(long)]
    pub normalize: bool,

    /// Parse and validate only; do not write the output file.
    #[arg(long)]
    pub check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl WarshArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("json"))
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(format!("{DEFAULT_BASENAME}.txt"))
}
