//! Seed fixtures
//!
//! A fixture is the three collections serialized as one JSON object. It is
//! read once when the store is initialized and again on every reset.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::board::Board;
use crate::error::Error;
use crate::list::List;
use crate::task::Task;
use crate::Result;

const SEED_JSON: &str = include_str!("../../fixtures/seed.json");

/// The boards, lists and tasks a store starts from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Fixture {
    /// Parse a fixture from JSON and check its ids.
    ///
    /// Parent references are not checked here; see `validate_references`.
    pub fn from_json(content: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(content)?;
        fixture.validate_ids()?;
        Ok(fixture)
    }

    /// Ids and parent references together
    pub fn validate(&self) -> Result<()> {
        self.validate_ids()?;
        self.validate_references()
    }

    /// Every id is positive and unique within its collection
    pub fn validate_ids(&self) -> Result<()> {
        unique_ids("board", self.boards.iter().map(|b| b.id))?;
        unique_ids("list", self.lists.iter().map(|l| l.id))?;
        unique_ids("task", self.tasks.iter().map(|t| t.id))?;
        Ok(())
    }

    /// Every list and task points at a parent present in the same fixture
    pub fn validate_references(&self) -> Result<()> {
        let board_ids: HashSet<u64> = self.boards.iter().map(|b| b.id).collect();
        let list_ids: HashSet<u64> = self.lists.iter().map(|l| l.id).collect();

        if let Some(list) = self.lists.iter().find(|l| !board_ids.contains(&l.board_id)) {
            return Err(Error::InvalidFixture(format!(
                "list {} references missing board {}",
                list.id, list.board_id
            )));
        }
        if let Some(task) = self.tasks.iter().find(|t| !list_ids.contains(&t.list_id)) {
            return Err(Error::InvalidFixture(format!(
                "task {} references missing list {}",
                task.id, task.list_id
            )));
        }
        Ok(())
    }
}

fn unique_ids(kind: &str, ids: impl Iterator<Item = u64>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id == 0 {
            return Err(Error::InvalidFixture(format!("{} id must be positive", kind)));
        }
        if !seen.insert(id) {
            return Err(Error::InvalidFixture(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}

/// Where a store loads its seed data from and saves snapshots to
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Read the fixture
    async fn load(&self) -> Result<Fixture>;

    /// Write a fixture back
    async fn save(&self, fixture: &Fixture) -> Result<()>;

    /// Short label for logs
    fn describe(&self) -> String;
}

/// The seed data compiled into the crate. Read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFixture;

impl EmbeddedFixture {
    pub fn fixture() -> Result<Fixture> {
        let fixture = Fixture::from_json(SEED_JSON)?;
        fixture.validate_references()?;
        Ok(fixture)
    }
}

#[async_trait]
impl FixtureSource for EmbeddedFixture {
    async fn load(&self) -> Result<Fixture> {
        Self::fixture()
    }

    async fn save(&self, _fixture: &Fixture) -> Result<()> {
        Err(Error::Storage(
            "Embedded seed fixture is read-only".to_string(),
        ))
    }

    fn describe(&self) -> String {
        "embedded seed".to_string()
    }
}

/// A fixture held in memory, mostly useful in tests
#[derive(Debug, Default)]
pub struct InMemoryFixture {
    fixture: RwLock<Fixture>,
}

impl InMemoryFixture {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture: RwLock::new(fixture),
        }
    }
}

#[async_trait]
impl FixtureSource for InMemoryFixture {
    async fn load(&self) -> Result<Fixture> {
        let fixture = self.fixture.read().await.clone();
        fixture.validate_ids()?;
        Ok(fixture)
    }

    async fn save(&self, fixture: &Fixture) -> Result<()> {
        *self.fixture.write().await = fixture.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory fixture".to_string()
    }
}

/// A fixture stored as a JSON file on disk
///
/// A missing file loads as an empty fixture and is created on first save.
#[derive(Debug, Clone)]
pub struct JsonFileFixture {
    path: PathBuf,
}

impl JsonFileFixture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FixtureSource for JsonFileFixture {
    async fn load(&self) -> Result<Fixture> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Fixture::default()),
            Err(e) => return Err(e.into()),
        };
        Fixture::from_json(&content)
    }

    async fn save(&self, fixture: &Fixture) -> Result<()> {
        let content = serde_json::to_string_pretty(fixture)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
