//! Inspection commands: `lex`, `parse` and `braces`.

use std::io::Write;

use asf_analysis::analyze;
use asf_lexer::tokenize;
use asf_parse::parse;
use serde::Serialize;

use crate::{CliError, Options, Outcome, OutputFormat};

#[derive(Serialize)]
struct TokenRecord<'src> {
    #[serde(flatten)]
    info: asf_ir::TokenInfo,
    text: &'src str,
}

/// Print the covering token list.
pub fn lex_to<W: Write>(source: &str, options: &Options, mut out: W) -> Result<Outcome, CliError> {
    let tokens = tokenize(source);
    match options.format {
        OutputFormat::Text => {
            writeln!(out, "{} tokens", tokens.len())?;
            for token in &tokens {
                let kind = format!("{:?}", token.kind);
                writeln!(
                    out,
                    "  {:>4}..={:<4} {kind:<18} {:?}",
                    token.start_index(),
                    token.end_index(),
                    token.text
                )?;
            }
        }
        OutputFormat::Json => {
            let records: Vec<_> = tokens
                .iter()
                .map(|token| TokenRecord {
                    info: token.info(),
                    text: token.text,
                })
                .collect();
            write_json(&mut out, &records)?;
        }
    }
    Ok(Outcome::Clean)
}

/// Print the parsed statements and any syntax errors.
pub fn parse_to<W: Write>(source: &str, options: &Options, mut out: W) -> Result<Outcome, CliError> {
    let output = parse(source);
    match options.format {
        OutputFormat::Text => {
            writeln!(out, "Assignments: {}", output.formula.assignments.len())?;
            for assignment in &output.formula.assignments {
                writeln!(
                    out,
                    "  {}..={}  {assignment}",
                    assignment.span.start_index(),
                    assignment.span.end_index()
                )?;
            }
            if output.has_errors() {
                writeln!(out, "Errors: {}", output.errors.len())?;
                for error in &output.errors {
                    writeln!(
                        out,
                        "  {}..={}  {error}",
                        error.span.start_index(),
                        error.span.end_index()
                    )?;
                }
            }
        }
        OutputFormat::Json => {
            let assignments: Vec<_> = output
                .formula
                .assignments
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "identifier": a.identifier.name,
                        "expression": a.expression.to_string(),
                        "start_index": a.span.start_index(),
                        "end_index": a.span.end_index(),
                    })
                })
                .collect();
            let errors: Vec<_> = output
                .errors
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "message": e.message,
                        "start_index": e.span.start_index(),
                        "end_index": e.span.end_index(),
                    })
                })
                .collect();
            let value = serde_json::json!({ "assignments": assignments, "errors": errors });
            write_json(&mut out, &value)?;
        }
    }
    Ok(if output.has_errors() {
        Outcome::Errors
    } else {
        Outcome::Clean
    })
}

/// Print matched brace pairs using the configured strategy.
pub fn braces_to<W: Write>(source: &str, options: &Options, mut out: W) -> Result<Outcome, CliError> {
    let analysis = analyze(source, &options.analysis());
    match options.format {
        OutputFormat::Text => {
            for pair in &analysis.braces {
                writeln!(out, "{} {}", pair.left, pair.right)?;
            }
        }
        OutputFormat::Json => write_json(&mut out, &analysis.braces)?,
    }
    Ok(Outcome::Clean)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
