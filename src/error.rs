//! Errors returned by a picking session.

use std::error::Error;
use std::io;

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = PickError> = std::result::Result<T, E>;

/// Why a session ended without a selection
#[derive(Error, Debug)]
pub enum PickError {
    /// The candidate list was empty, the terminal was never touched
    #[error("no items to select from")]
    EmptyInput,
    /// The user confirmed while nothing matched the query
    #[error("no item matches the query")]
    EmptyResult,
    /// The user aborted the session
    #[error("selection aborted by user")]
    AbortedByUser,
    /// Drawing on or reading from the terminal failed
    #[error("terminal error: {0}")]
    Terminal(#[source] Box<dyn Error + Send + Sync>),
}

impl PickError {
    /// Wraps any backend error
    pub fn terminal<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        PickError::Terminal(Box::new(err))
    }

    /// True when the session ended because the user aborted it
    pub fn is_abort(&self) -> bool {
        matches!(self, PickError::AbortedByUser)
    }
}

impl From<io::Error> for PickError {
    fn from(err: io::Error) -> Self {
        PickError::terminal(err)
    }
}
