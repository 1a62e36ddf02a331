//! Controller error types

use thiserror::Error;

use crate::board::BoardError;
use crate::persistence::StoreError;

/// Errors raised while handling a UI event
#[derive(Error, Debug)]
pub enum ControllerError {
    /// Widget or selection lookup failed
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Persisting the change failed; the in-memory change stays applied
    #[error("Persistence failed: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for controller operations
pub type ControllerResult<T> = Result<T, ControllerError>;
