//! The fixed diagnostic catalog.
//!
//! Each code is a descriptor: a stable id plus a severity. Messages and
//! spans belong to individual [`Diagnostic`](crate::Diagnostic)s.

use std::fmt;
use std::str::FromStr;

use crate::Severity;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unexpected token during parsing
    ParseError,
    /// Method is not a sampling-variable method
    UnknownMethodName,
    /// Deallocation keyword assigned to an ordinary variable
    InvalidAssignmentFromKeyword,
    /// Non-keyword assigned to the deallocation-option variable
    InvalidAssignmentToDeallocationOption,
    /// Function is not a built-in
    UnknownFunctionName,
    /// Method invoked on something other than a sampling variable
    InvalidMethodInvocationTarget,
    /// Function argument count matches no overload
    InvalidFunctionSignature,
    /// Method argument count matches no overload
    InvalidMethodSignature,
}

impl ErrorCode {
    /// Every code in catalog order. `test_all_is_exhaustive` keeps this in
    /// sync with `as_str`.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::ParseError,
        ErrorCode::UnknownMethodName,
        ErrorCode::InvalidAssignmentFromKeyword,
        ErrorCode::InvalidAssignmentToDeallocationOption,
        ErrorCode::UnknownFunctionName,
        ErrorCode::InvalidMethodInvocationTarget,
        ErrorCode::InvalidFunctionSignature,
        ErrorCode::InvalidMethodSignature,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ParseError => "parse-error",
            ErrorCode::UnknownMethodName => "unknown-method-name",
            ErrorCode::InvalidAssignmentFromKeyword => "invalid-assignment-from-keyword",
            ErrorCode::InvalidAssignmentToDeallocationOption => {
                "invalid-assignment-to-deallocation-option"
            }
            ErrorCode::UnknownFunctionName => "unknown-function-name",
            ErrorCode::InvalidMethodInvocationTarget => "invalid-method-invocation-target",
            ErrorCode::InvalidFunctionSignature => "invalid-function-signature",
            ErrorCode::InvalidMethodSignature => "invalid-method-signature",
        }
    }

    /// Every catalog entry is an error.
    pub const fn severity(self) -> Severity {
        Severity::Error
    }

    pub const fn is_parse_error(self) -> bool {
        matches!(self, ErrorCode::ParseError)
    }

    /// Long-form explanation, shown by `asf explain`.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::ParseError => {
                "The parser met a token it did not expect. The statement containing \
                 it is skipped up to the next `;` and contributes nothing to semantic \
                 checks."
            }
            ErrorCode::UnknownMethodName => {
                "Only the sampling methods GetSample, GetSamplePercent, \
                 GetSamplePeriod, Count and HistoryBeginTime can be invoked."
            }
            ErrorCode::InvalidAssignmentFromKeyword => {
                "Deallocation keywords (requeue, terminate, taskcompletion, \
                 retaineddata) may only be assigned to $NodeDeallocationOption."
            }
            ErrorCode::InvalidAssignmentToDeallocationOption => {
                "$NodeDeallocationOption only accepts one of the deallocation \
                 keywords requeue, terminate, taskcompletion or retaineddata."
            }
            ErrorCode::UnknownFunctionName => {
                "The called function is not one of the built-in functions."
            }
            ErrorCode::InvalidMethodInvocationTarget => {
                "Methods can only be invoked on sampling variables such as \
                 $CPUPercent or $PendingTasks."
            }
            ErrorCode::InvalidFunctionSignature => {
                "No overload of the called function takes the given number of \
                 arguments."
            }
            ErrorCode::InvalidMethodSignature => {
                "No overload of the invoked method takes the given number of \
                 arguments."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown diagnostic code `{0}`")]
pub struct UnknownErrorCode(pub String);

/// Case-insensitive lookup by id, e.g. `"unknown-method-name"`.
impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

impl serde::Serialize for ErrorCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
