//! Board repository trait
//!
//! Defines the interface for board storage operations.

use async_trait::async_trait;

use super::model::{Board, BoardId, BoardPatch, BoardSummary, NewBoard};
use crate::Result;

/// Repository interface for board CRUD operations
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// All boards in insertion order
    async fn list_boards(&self) -> Vec<Board>;

    /// Get a board by ID
    async fn get_board(&self, id: BoardId) -> Option<Board>;

    /// Create a new board with the next free id
    async fn create_board(&self, board: NewBoard) -> Result<Board>;

    /// Merge a patch into an existing board. `Ok(None)` when the id is unknown.
    async fn update_board(&self, id: BoardId, patch: BoardPatch) -> Result<Option<Board>>;

    /// Delete a board together with its lists and their tasks
    async fn delete_board(&self, id: BoardId) -> bool;

    /// List and task counts for a board
    async fn board_summary(&self, id: BoardId) -> Option<BoardSummary>;
}
