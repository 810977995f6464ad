use std::io;

use asf_diagnostic::UnknownErrorCode;

/// Failures of the driver itself, as opposed to problems in the formula.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value `{value}` for `--{option}`")]
    InvalidValue { option: &'static str, value: String },

    #[error("missing argument\n\nUsage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error(transparent)]
    UnknownCode(#[from] UnknownErrorCode),
}

impl CliError {
    /// Classify an error from reading `path`.
    pub fn read(path: &str, error: io::Error) -> Self {
        let path = path.to_string();
        match error.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read {
                path,
                source: error,
            },
        }
    }
}
