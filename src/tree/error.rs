use crate::errors::ErrorKind;
use crate::pattern::PatternError;
use crate::types::BoxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("route pattern '{pattern}' is empty after normalization")]
    EmptyPattern { pattern: String },
    #[error(
        "catch-all segment must be terminal: index {segment_index} of {total_segments} in '{pattern}'"
    )]
    CatchAllNotLast {
        pattern: String,
        segment_index: usize,
        total_segments: usize,
    },
    #[error("catch-all at '{position}' cannot receive child routes")]
    CatchAllWithChildren { position: String },
    #[error(
        "parameter at '{position}' is already bound as '{existing}'; cannot rebind it as '{requested}'"
    )]
    ParamNameConflict {
        position: String,
        existing: String,
        requested: String,
    },
    #[error("duplicate route '{pattern}'")]
    DuplicateRoute { pattern: String },
    #[error("splicing at '{position}' would replace an existing handler with a different one")]
    DuplicateConflictingHandler { position: String },
    #[error("handler transform for '{pattern}' failed: {source}")]
    Transform {
        pattern: String,
        #[source]
        source: BoxError,
    },
    #[error("subtree uses separator '{found}' but this tree uses '{expected}'")]
    SeparatorMismatch { expected: char, found: char },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl TreeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::EmptyPattern { .. } | TreeError::SeparatorMismatch { .. } => {
                ErrorKind::InvalidArgument
            }
            TreeError::CatchAllNotLast { .. } | TreeError::CatchAllWithChildren { .. } => {
                ErrorKind::MalformedPattern
            }
            TreeError::ParamNameConflict { .. } => ErrorKind::NameConflict,
            TreeError::DuplicateRoute { .. } => ErrorKind::DuplicateRoute,
            TreeError::DuplicateConflictingHandler { .. } => {
                ErrorKind::DuplicateConflictingHandler
            }
            TreeError::Transform { .. } => ErrorKind::TransformRejected,
            TreeError::Pattern(err) => err.kind(),
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
