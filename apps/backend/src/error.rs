use thiserror::Error;

use crate::errors::domain::DomainError;

/// Public-surface error for engine operations.
///
/// Domain rejections pass through unchanged; the remaining variants cover
/// construction-time configuration problems and use after `shutdown()`.
/// Every variant is recoverable: the instance stays consistent and usable
/// after a rejected operation.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Game instance has been shut down")]
    Terminated,
}

impl GameError {
    /// The underlying domain error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            GameError::Domain(err) => Some(err),
            _ => None,
        }
    }
}
