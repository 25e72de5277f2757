use colored::*;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

pub fn print_status<W: Write>(out: &mut W, status_code: u16) -> io::Result<()> {
    writeln!(out, "Status Code: {}", status_code)
}

pub fn print_http_error<W: Write>(out: &mut W, body: &str) -> io::Result<()> {
    writeln!(out, "Error: {}", body)
}

pub fn print_unsupported_format<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Unsupported output format: {}", path.display())
}

/// Echo the raw response body, untouched.
pub fn print_body<W: Write>(out: &mut W, body: &str) -> io::Result<()> {
    writeln!(out, "{}", body)?;
    out.flush()
}

/// Diagnostics go to stderr so stdout stays machine-readable.
pub fn log_verbose(verbose: bool, message: impl Display) {
    if verbose {
        eprintln!("{}", format!("[restful] {}", message).dimmed());
    }
}

pub fn print_fatal(error: impl Display) {
    eprintln!("{} {}", "Error:".red(), error);
}
