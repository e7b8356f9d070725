use super::RouterOptionsError;
use crate::errors::ErrorKind;
use crate::tree::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

impl RouterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouterError::AddWhileSealed { .. }
            | RouterError::FindWhileMutable
            | RouterError::ReadOnlyUnavailable => ErrorKind::Lifecycle,
            RouterError::Tree(err) => err.kind(),
            RouterError::Options(err) => err.kind(),
        }
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
