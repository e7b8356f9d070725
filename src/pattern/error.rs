use crate::errors::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        segment: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("constraint '{pattern}' for parameter '{name}' failed to compile: {error}")]
    RegexConstraintInvalid {
        pattern: String,
        name: String,
        error: String,
    },
}

impl PatternError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatternError::ParameterInvalidStart { .. }
            | PatternError::ParameterInvalidCharacter { .. } => ErrorKind::MalformedPattern,
            PatternError::RegexConstraintInvalid { .. } => ErrorKind::InvalidPattern,
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
