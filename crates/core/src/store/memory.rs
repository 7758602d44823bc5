//! Thread-safe store shared by every caller
//!
//! All mutations take the single write lock for their whole duration, so a
//! board or list cascade can never interleave with another mutation or be
//! observed half-applied by a reader.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::board::{Board, BoardId, BoardPatch, BoardRepository, BoardSummary, NewBoard};
use crate::list::{List, ListId, ListPatch, ListRepository, NewList};
use crate::task::{NewTask, Task, TaskId, TaskPatch, TaskRepository};
use crate::Result;

use super::database::{Database, StoreConfig};
use super::fixture::{EmbeddedFixture, Fixture, FixtureSource, InMemoryFixture};

/// Load a fixture, holding it to the same reference rules as the store.
///
/// A store that accepts orphaned lists and tasks can save them, so it must be
/// able to load them back.
async fn load_checked(source: &dyn FixtureSource, config: StoreConfig) -> Result<Fixture> {
    let fixture = source.load().await?;
    if config.validate_references {
        fixture.validate_references()?;
    }
    Ok(fixture)
}

/// Shared in-memory store seeded from a fixture
#[derive(Clone)]
pub struct MemoryStore {
    db: Arc<RwLock<Database>>,
    source: Arc<dyn FixtureSource>,
    config: StoreConfig,
}

impl MemoryStore {
    /// Create a store and load it from `source` before returning
    pub async fn new(source: Arc<dyn FixtureSource>, config: StoreConfig) -> Result<Self> {
        let fixture = load_checked(source.as_ref(), config).await?;
        info!(
            source = %source.describe(),
            boards = fixture.boards.len(),
            lists = fixture.lists.len(),
            tasks = fixture.tasks.len(),
            "store initialized"
        );

        Ok(Self {
            db: Arc::new(RwLock::new(Database::from_fixture(fixture, config))),
            source,
            config,
        })
    }

    /// Store seeded from the embedded fixture
    pub async fn seeded(config: StoreConfig) -> Result<Self> {
        Self::new(Arc::new(EmbeddedFixture), config).await
    }

    /// Store seeded from a fixture value
    pub async fn with_fixture(fixture: Fixture, config: StoreConfig) -> Result<Self> {
        Self::new(Arc::new(InMemoryFixture::new(fixture)), config).await
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Reload all three collections from the fixture source.
    ///
    /// Entities handed out before this call describe the old state.
    pub async fn initialize(&self) -> Result<()> {
        let fixture = load_checked(self.source.as_ref(), self.config).await?;
        let counts = (fixture.boards.len(), fixture.lists.len(), fixture.tasks.len());

        *self.db.write().await = Database::from_fixture(fixture, self.config);

        info!(
            source = %self.source.describe(),
            boards = counts.0,
            lists = counts.1,
            tasks = counts.2,
            "store reloaded"
        );
        Ok(())
    }

    /// Discard every mutation and go back to the fixture
    pub async fn reset(&self) -> Result<()> {
        self.initialize().await
    }

    /// Deep copy of the current collections
    pub async fn snapshot(&self) -> Fixture {
        self.db.read().await.snapshot()
    }

    /// Write the current collections back through the fixture source
    pub async fn save(&self) -> Result<()> {
        let snapshot = self.snapshot().await;
        self.source.save(&snapshot).await?;
        info!(source = %self.source.describe(), "store saved");
        Ok(())
    }
}

#[async_trait]
impl BoardRepository for MemoryStore {
    async fn list_boards(&self) -> Vec<Board> {
        self.db.read().await.boards().to_vec()
    }

    async fn get_board(&self, id: BoardId) -> Option<Board> {
        self.db.read().await.get_board(id).cloned()
    }

    async fn create_board(&self, board: NewBoard) -> Result<Board> {
        self.db.write().await.create_board(board)
    }

    async fn update_board(&self, id: BoardId, patch: BoardPatch) -> Result<Option<Board>> {
        self.db.write().await.update_board(id, patch)
    }

    async fn delete_board(&self, id: BoardId) -> bool {
        self.db.write().await.delete_board(id)
    }

    async fn board_summary(&self, id: BoardId) -> Option<BoardSummary> {
        self.db.read().await.board_summary(id)
    }
}

#[async_trait]
impl ListRepository for MemoryStore {
    async fn list_lists(&self) -> Vec<List> {
        self.db.read().await.lists().to_vec()
    }

    async fn lists_by_board(&self, board_id: BoardId) -> Vec<List> {
        self.db.read().await.lists_by_board(board_id)
    }

    async fn get_list(&self, id: ListId) -> Option<List> {
        self.db.read().await.get_list(id).cloned()
    }

    async fn create_list(&self, list: NewList) -> Result<List> {
        self.db.write().await.create_list(list)
    }

    async fn update_list(&self, id: ListId, patch: ListPatch) -> Result<Option<List>> {
        self.db.write().await.update_list(id, patch)
    }

    async fn delete_list(&self, id: ListId) -> bool {
        self.db.write().await.delete_list(id)
    }
}

#[async_trait]
impl TaskRepository for MemoryStore {
    async fn list_tasks(&self) -> Vec<Task> {
        self.db.read().await.tasks().to_vec()
    }

    async fn tasks_by_list(&self, list_id: ListId) -> Vec<Task> {
        self.db.read().await.tasks_by_list(list_id)
    }

    async fn get_task(&self, id: TaskId) -> Option<Task> {
        self.db.read().await.get_task(id).cloned()
    }

    async fn create_task(&self, task: NewTask) -> Result<Task> {
        self.db.write().await.create_task(task)
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Option<Task>> {
        self.db.write().await.update_task(id, patch)
    }

    async fn toggle_completion(&self, id: TaskId) -> Option<Task> {
        self.db.write().await.toggle_completion(id)
    }

    async fn move_to_list(&self, id: TaskId, list_id: ListId) -> Result<Option<Task>> {
        self.db.write().await.move_to_list(id, list_id)
    }

    async fn delete_task(&self, id: TaskId) -> bool {
        self.db.write().await.delete_task(id)
    }
}
