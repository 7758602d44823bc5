//! Error types for the core library

use thiserror::Error;

use crate::board::BoardId;
use crate::list::ListId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Board not found: {0}")]
    BoardNotFound(BoardId),

    #[error("List not found: {0}")]
    ListNotFound(ListId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// True when the error reports a dangling parent reference
    pub fn is_reference_error(&self) -> bool {
        matches!(self, Self::BoardNotFound(_) | Self::ListNotFound(_))
    }
}
