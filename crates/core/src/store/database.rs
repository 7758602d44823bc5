//! Single-threaded core of the store
//!
//! Every operation here runs to completion inside one `&mut self` call, which
//! is what makes the board and list cascades atomic once the database sits
//! behind a lock.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, BoardId, BoardPatch, BoardSummary, NewBoard};
use crate::error::Error;
use crate::id::{IdPolicy, IdSequence};
use crate::list::{List, ListId, ListPatch, NewList};
use crate::task::{NewTask, Task, TaskId, TaskPatch};
use crate::Result;

use super::fixture::Fixture;

/// Store behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub id_policy: IdPolicy,
    /// Reject lists and tasks whose parent does not exist
    pub validate_references: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            validate_references: true,
        }
    }
}

/// Boards, lists and tasks in insertion order
#[derive(Debug, Clone)]
pub struct Database {
    boards: Vec<Board>,
    lists: Vec<List>,
    tasks: Vec<Task>,
    board_ids: IdSequence,
    list_ids: IdSequence,
    task_ids: IdSequence,
    config: StoreConfig,
}

impl Database {
    /// An empty database
    pub fn new(config: StoreConfig) -> Self {
        Self::from_fixture(Fixture::default(), config)
    }

    /// A database holding exactly the fixture's rows
    pub fn from_fixture(fixture: Fixture, config: StoreConfig) -> Self {
        let policy = config.id_policy;
        Self {
            board_ids: IdSequence::seeded(policy, fixture.boards.iter().map(|b| b.id)),
            list_ids: IdSequence::seeded(policy, fixture.lists.iter().map(|l| l.id)),
            task_ids: IdSequence::seeded(policy, fixture.tasks.iter().map(|t| t.id)),
            boards: fixture.boards,
            lists: fixture.lists,
            tasks: fixture.tasks,
            config,
        }
    }

    /// Deep copy of all three collections
    pub fn snapshot(&self) -> Fixture {
        Fixture {
            boards: self.boards.clone(),
            lists: self.lists.clone(),
            tasks: self.tasks.clone(),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    // ------------------------------------------------------------------
    // Boards
    // ------------------------------------------------------------------

    pub fn get_board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn create_board(&mut self, new_board: NewBoard) -> Result<Board> {
        let id = self.board_ids.peek(self.boards.iter().map(|b| b.id))?;
        let board = new_board.into_board(id)?;
        self.board_ids.advance_past(id);
        self.boards.push(board.clone());
        debug!(board_id = id, "created board");
        Ok(board)
    }

    pub fn update_board(&mut self, id: BoardId, patch: BoardPatch) -> Result<Option<Board>> {
        let Some(board) = self.boards.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        patch.apply_to(board)?;
        debug!(board_id = id, "updated board");
        Ok(Some(board.clone()))
    }

    /// Removes the board, every list on it and every task in those lists
    pub fn delete_board(&mut self, id: BoardId) -> bool {
        let Some(index) = self.boards.iter().position(|b| b.id == id) else {
            return false;
        };

        let list_ids: HashSet<ListId> = self
            .lists
            .iter()
            .filter(|l| l.board_id == id)
            .map(|l| l.id)
            .collect();

        let tasks_before = self.tasks.len();
        self.tasks.retain(|t| !list_ids.contains(&t.list_id));
        self.lists.retain(|l| l.board_id != id);
        self.boards.remove(index);

        debug!(
            board_id = id,
            lists_removed = list_ids.len(),
            tasks_removed = tasks_before - self.tasks.len(),
            "deleted board"
        );
        true
    }

    pub fn board_summary(&self, id: BoardId) -> Option<BoardSummary> {
        let board = self.get_board(id)?.clone();
        let list_ids: HashSet<ListId> = self
            .lists
            .iter()
            .filter(|l| l.board_id == id)
            .map(|l| l.id)
            .collect();
        let tasks = self.tasks.iter().filter(|t| list_ids.contains(&t.list_id));

        let (task_count, finished_count) =
            tasks.fold((0, 0), |(all, done), t| (all + 1, done + usize::from(t.is_finished)));

        Some(BoardSummary {
            board,
            list_count: list_ids.len(),
            task_count,
            finished_count,
        })
    }

    // ------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------

    pub fn lists_by_board(&self, board_id: BoardId) -> Vec<List> {
        self.lists
            .iter()
            .filter(|l| l.board_id == board_id)
            .cloned()
            .collect()
    }

    pub fn get_list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn create_list(&mut self, new_list: NewList) -> Result<List> {
        if self.config.validate_references && self.get_board(new_list.board_id).is_none() {
            warn!(board_id = new_list.board_id, "rejected list for unknown board");
            return Err(Error::BoardNotFound(new_list.board_id));
        }

        let id = self.list_ids.peek(self.lists.iter().map(|l| l.id))?;
        let list = new_list.into_list(id)?;
        self.list_ids.advance_past(id);
        self.lists.push(list.clone());
        debug!(list_id = id, board_id = list.board_id, "created list");
        Ok(list)
    }

    pub fn update_list(&mut self, id: ListId, patch: ListPatch) -> Result<Option<List>> {
        let Some(list) = self.lists.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        patch.apply_to(list)?;
        debug!(list_id = id, "updated list");
        Ok(Some(list.clone()))
    }

    /// Removes the list and every task in it
    pub fn delete_list(&mut self, id: ListId) -> bool {
        let Some(index) = self.lists.iter().position(|l| l.id == id) else {
            return false;
        };

        let tasks_before = self.tasks.len();
        self.tasks.retain(|t| t.list_id != id);
        self.lists.remove(index);

        debug!(
            list_id = id,
            tasks_removed = tasks_before - self.tasks.len(),
            "deleted list"
        );
        true
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    pub fn tasks_by_list(&self, list_id: ListId) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.list_id == list_id)
            .cloned()
            .collect()
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn create_task(&mut self, new_task: NewTask) -> Result<Task> {
        self.check_list(new_task.list_id)?;

        let id = self.task_ids.peek(self.tasks.iter().map(|t| t.id))?;
        let task = new_task.into_task(id)?;
        self.task_ids.advance_past(id);
        self.tasks.push(task.clone());
        debug!(task_id = id, list_id = task.list_id, "created task");
        Ok(task)
    }

    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Result<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        patch.apply_to(task)?;
        debug!(task_id = id, "updated task");
        Ok(Some(task.clone()))
    }

    pub fn toggle_completion(&mut self, id: TaskId) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.toggle();
        debug!(task_id = id, is_finished = task.is_finished, "toggled task");
        Some(task.clone())
    }

    pub fn move_to_list(&mut self, id: TaskId, list_id: ListId) -> Result<Option<Task>> {
        if self.get_task(id).is_none() {
            return Ok(None);
        }
        self.check_list(list_id)?;

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        let from = task.list_id;
        task.list_id = list_id;
        debug!(task_id = id, from, to = list_id, "moved task");
        Ok(Some(task.clone()))
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        debug!(task_id = id, "deleted task");
        true
    }

    fn check_list(&self, list_id: ListId) -> Result<()> {
        if self.config.validate_references && self.get_list(list_id).is_none() {
            warn!(list_id, "rejected task for unknown list");
            return Err(Error::ListNotFound(list_id));
        }
        Ok(())
    }
}
