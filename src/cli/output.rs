//! User-facing terminal output for the CLI.

use std::io::Write;
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::model::Document;

/// Prints the one-line run summary to stdout.
pub fn print_summary(document: &Document, destination: Option<&Path>) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = write!(stdout, "✓ ");
    let _ = stdout.reset();

    let counts = format!(
        "{} chapters, {} verses",
        document.chapter_count(),
        document.verse_count()
    );
    let _ = match destination {
        Some(path) => writeln!(stdout, "{counts} written to {}", path.display()),
        None => writeln!(stdout, "{counts} validated"),
    };
}
