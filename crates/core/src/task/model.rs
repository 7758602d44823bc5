//! Task model definitions

use serde::{Deserialize, Serialize};

use crate::list::ListId;
use crate::{require_name, Result};

pub type TaskId = u64;

/// Completion state of a task. Only `Task::toggle` moves between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Incomplete,
    Finished,
}

/// A leaf work item inside a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_finished: bool,
    pub list_id: ListId,
}

impl Task {
    pub fn status(&self) -> TaskStatus {
        if self.is_finished {
            TaskStatus::Finished
        } else {
            TaskStatus::Incomplete
        }
    }

    /// Flip between incomplete and finished
    pub fn toggle(&mut self) {
        self.is_finished = !self.is_finished;
    }
}

/// Fields needed to create a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub list_id: ListId,
    #[serde(default)]
    pub is_finished: bool,
}

impl NewTask {
    pub fn new(name: impl Into<String>, list_id: ListId) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            list_id,
            is_finished: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Create the task already finished
    pub fn finished(mut self) -> Self {
        self.is_finished = true;
        self
    }

    pub(crate) fn into_task(self, id: TaskId) -> Result<Task> {
        Ok(Task {
            id,
            name: require_name("Task", &self.name)?,
            description: self.description.trim().to_string(),
            is_finished: self.is_finished,
            list_id: self.list_id,
        })
    }
}

/// Partial update of a task.
///
/// Moving a task to another list goes through `TaskRepository::move_to_list`,
/// so `list_id` is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_finished: Option<bool>,
}

impl TaskPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn finished(is_finished: bool) -> Self {
        Self {
            is_finished: Some(is_finished),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn apply_to(self, task: &mut Task) -> Result<()> {
        let name = self
            .name
            .map(|name| require_name("Task", &name))
            .transpose()?;

        if let Some(name) = name {
            task.name = name;
        }
        if let Some(description) = self.description {
            task.description = description.trim().to_string();
        }
        if let Some(is_finished) = self.is_finished {
            task.is_finished = is_finished;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        NewTask::new("Buy milk", 10)
            .with_description("2 liters")
            .into_task(5)
            .unwrap()
    }

    #[test]
    fn test_create_task() {
        let task = task();
        assert_eq!(task.id, 5);
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.list_id, 10);
        assert!(!task.is_finished);
        assert_eq!(task.status(), TaskStatus::Incomplete);
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut task = task();
        task.toggle();
        assert_eq!(task.status(), TaskStatus::Finished);
        task.toggle();
        assert_eq!(task.status(), TaskStatus::Incomplete);
    }

    #[test]
    fn test_patch_finished_only() {
        let mut task = task();
        TaskPatch::finished(true).apply_to(&mut task).unwrap();

        assert!(task.is_finished);
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.description, "2 liters");
        assert_eq!(task.list_id, 10);
    }

    #[test]
    fn test_patch_rejects_list_id() {
        let result: std::result::Result<TaskPatch, _> =
            serde_json::from_str(r#"{"listId": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_task_json_shape() {
        let json = serde_json::to_value(task()).unwrap();
        assert_eq!(json["isFinished"], false);
        assert_eq!(json["listId"], 10);
    }
}
