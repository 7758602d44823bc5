//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{NewTask, Task, TaskId, TaskPatch};
use crate::list::ListId;
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks in insertion order
    async fn list_tasks(&self) -> Vec<Task>;

    /// Tasks belonging to a list, in insertion order
    async fn tasks_by_list(&self, list_id: ListId) -> Vec<Task>;

    /// Get a task by ID
    async fn get_task(&self, id: TaskId) -> Option<Task>;

    /// Create a new task in a list
    async fn create_task(&self, task: NewTask) -> Result<Task>;

    /// Merge a patch into an existing task. `Ok(None)` when the id is unknown.
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Option<Task>>;

    /// Flip a task between incomplete and finished
    async fn toggle_completion(&self, id: TaskId) -> Option<Task>;

    /// Re-parent a task onto another list
    async fn move_to_list(&self, id: TaskId, list_id: ListId) -> Result<Option<Task>>;

    /// Delete a task by ID
    async fn delete_task(&self, id: TaskId) -> bool;
}
