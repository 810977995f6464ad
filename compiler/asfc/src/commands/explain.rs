//! The `explain` command: describe a diagnostic code.

use std::io::Write;

use asf_diagnostic::ErrorCode;

use crate::{CliError, Outcome};

pub fn explain_to<W: Write>(code: &str, mut out: W) -> Result<Outcome, CliError> {
    let code: ErrorCode = code.parse()?;
    writeln!(out, "{code} ({})", code.severity())?;
    writeln!(out)?;
    writeln!(out, "{}", code.description())?;
    Ok(Outcome::Clean)
}
