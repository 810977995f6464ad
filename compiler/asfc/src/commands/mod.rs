//! Command handlers for the `asf` CLI.
//!
//! Each handler writes to a caller-supplied writer and returns an
//! [`Outcome`](crate::Outcome) or a [`CliError`]. Input loading lives here
//! in the module root.

mod check;
mod debug;
mod explain;

use std::io::Read;

pub use check::{check_file, check_to};
pub use debug::{braces_to, lex_to, parse_to};
pub use explain::explain_to;

use crate::CliError;

/// Read `path`, or standard input when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::read("<stdin>", e))?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))
}

/// How `path` is named in output.
pub fn display_name(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}
