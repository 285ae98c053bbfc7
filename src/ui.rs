//! Terminal output. The version goes to stdout, everything else to stderr.

use std::io::{self, Write};

use console::style;

use crate::domain::ParsedVersion;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Error line with a red `ERROR:` label.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Write the version as the single line of stdout.
pub fn display_version(version: &ParsedVersion) -> io::Result<()> {
    write_version(&mut io::stdout().lock(), version)
}

/// Write the version followed by a newline.
pub fn write_version<W: Write>(out: &mut W, version: &ParsedVersion) -> io::Result<()> {
    writeln!(out, "{}", version)?;
    out.flush()
}
