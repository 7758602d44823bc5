//! List repository trait

use async_trait::async_trait;

use super::model::{List, ListId, ListPatch, NewList};
use crate::board::BoardId;
use crate::Result;

/// Repository interface for list CRUD operations
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// All lists in insertion order
    async fn list_lists(&self) -> Vec<List>;

    /// Lists belonging to a board, in insertion order
    async fn lists_by_board(&self, board_id: BoardId) -> Vec<List>;

    /// Get a list by ID
    async fn get_list(&self, id: ListId) -> Option<List>;

    /// Create a new list on a board
    async fn create_list(&self, list: NewList) -> Result<List>;

    /// Merge a patch into an existing list. `Ok(None)` when the id is unknown.
    async fn update_list(&self, id: ListId, patch: ListPatch) -> Result<Option<List>>;

    /// Delete a list together with its tasks
    async fn delete_list(&self, id: ListId) -> bool;
}
