//! Board model definitions

use serde::{Deserialize, Serialize};

use crate::{require_name, Result};

pub type BoardId = u64;

/// Placeholder image used when a caller has no thumbnail of its own
pub const DEFAULT_THUMBNAIL: &str =
    "https://via.placeholder.com/400x150/4A90E2/ffffff?text=Board";

/// A board on the task board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail_photo: String,
}

/// Fields needed to create a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBoard {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail_photo: String,
}

impl NewBoard {
    pub fn new(name: impl Into<String>, thumbnail_photo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            thumbnail_photo: thumbnail_photo.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate and build the stored board
    pub(crate) fn into_board(self, id: BoardId) -> Result<Board> {
        Ok(Board {
            id,
            name: require_name("Board", &self.name)?,
            description: self.description.trim().to_string(),
            thumbnail_photo: self.thumbnail_photo,
        })
    }
}

/// Partial update of a board; absent fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BoardPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_photo: Option<String>,
}

impl BoardPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_thumbnail_photo(mut self, thumbnail_photo: impl Into<String>) -> Self {
        self.thumbnail_photo = Some(thumbnail_photo.into());
        self
    }

    /// Merge present fields into `board`. Nothing is written if validation fails.
    pub(crate) fn apply_to(self, board: &mut Board) -> Result<()> {
        let name = self
            .name
            .map(|name| require_name("Board", &name))
            .transpose()?;

        if let Some(name) = name {
            board.name = name;
        }
        if let Some(description) = self.description {
            board.description = description.trim().to_string();
        }
        if let Some(thumbnail_photo) = self.thumbnail_photo {
            board.thumbnail_photo = thumbnail_photo;
        }
        Ok(())
    }
}

/// Counts shown alongside a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub board: Board,
    pub list_count: usize,
    pub task_count: usize,
    pub finished_count: usize,
}
