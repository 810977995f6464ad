//! Command-line flags shared by every command.

use asf_analysis::{AnalysisOptions, BraceStrategy};
use asf_diagnostic::emitter::ColorMode;
use asf_diagnostic::DiagnosticConfig;

use crate::CliError;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub format: OutputFormat,
    pub color: ColorMode,
    /// 0 = unlimited.
    pub error_limit: usize,
    pub braces: BraceStrategy,
}

impl Options {
    /// Split `args` into flags and positional arguments. `-` is positional
    /// (standard input).
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<(Self, Vec<&str>), CliError> {
        let mut options = Options::default();
        let mut positional = Vec::new();

        for arg in args {
            let arg = arg.as_ref();
            if arg == "-" || !arg.starts_with('-') {
                positional.push(arg);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                options.format = match value {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => return Err(invalid("format", value)),
                };
            } else if let Some(value) = arg.strip_prefix("--color=") {
                options.color = match value {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return Err(invalid("color", value)),
                };
            } else if let Some(value) = arg.strip_prefix("--error-limit=") {
                options.error_limit = value.parse().map_err(|_| invalid("error-limit", value))?;
            } else if let Some(value) = arg.strip_prefix("--braces=") {
                options.braces = BraceStrategy::parse(value).ok_or_else(|| invalid("braces", value))?;
            } else {
                return Err(CliError::UnknownOption(arg.to_string()));
            }
        }

        Ok((options, positional))
    }

    pub fn analysis(&self) -> AnalysisOptions {
        AnalysisOptions {
            brace_strategy: self.braces,
            config: DiagnosticConfig {
                error_limit: self.error_limit,
                ..DiagnosticConfig::default()
            },
        }
    }
}

fn invalid(option: &'static str, value: &str) -> CliError {
    CliError::InvalidValue {
        option,
        value: value.to_string(),
    }
}
