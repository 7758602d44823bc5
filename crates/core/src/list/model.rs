//! List model definitions

use serde::{Deserialize, Serialize};

use crate::board::BoardId;
use crate::{require_name, Result};

pub type ListId = u64;

/// Color given to a list when the caller does not pick one
pub const DEFAULT_LIST_COLOR: &str = "#ffffff";

fn default_color() -> String {
    DEFAULT_LIST_COLOR.to_string()
}

/// A column inside a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub color: String,
    pub board_id: BoardId,
}

/// Fields needed to create a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewList {
    pub name: String,
    pub board_id: BoardId,
    #[serde(default = "default_color")]
    pub color: String,
}

impl NewList {
    pub fn new(name: impl Into<String>, board_id: BoardId) -> Self {
        Self {
            name: name.into(),
            board_id,
            color: default_color(),
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub(crate) fn into_list(self, id: ListId) -> Result<List> {
        let color = match self.color.trim() {
            "" => default_color(),
            color => color.to_string(),
        };
        Ok(List {
            id,
            name: require_name("List", &self.name)?,
            color,
            board_id: self.board_id,
        })
    }
}

/// Partial update of a list.
///
/// There is deliberately no `board_id` here: lists are never moved between
/// boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl ListPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub(crate) fn apply_to(self, list: &mut List) -> Result<()> {
        let name = self
            .name
            .map(|name| require_name("List", &name))
            .transpose()?;

        if let Some(name) = name {
            list.name = name;
        }
        if let Some(color) = self.color {
            list.color = color;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_defaults_color() {
        let list = NewList::new("Todo", 1).into_list(3).unwrap();
        assert_eq!(list.color, DEFAULT_LIST_COLOR);
        assert_eq!(list.board_id, 1);
    }

    #[test]
    fn test_blank_color_falls_back_to_default() {
        let list = NewList::new("Todo", 1).with_color("  ").into_list(3).unwrap();
        assert_eq!(list.color, DEFAULT_LIST_COLOR);
    }

    #[test]
    fn test_new_list_deserializes_without_color() {
        let list: NewList = serde_json::from_str(r#"{"name": "Doing", "boardId": 2}"#).unwrap();
        assert_eq!(list.color, DEFAULT_LIST_COLOR);
        assert_eq!(list.board_id, 2);
    }

    #[test]
    fn test_patch_color_keeps_name() {
        let mut list = NewList::new("Todo", 1).into_list(1).unwrap();
        ListPatch::color("#007AFF").apply_to(&mut list).unwrap();

        assert_eq!(list.name, "Todo");
        assert_eq!(list.color, "#007AFF");
    }

    #[test]
    fn test_patch_cannot_reparent() {
        let result: std::result::Result<ListPatch, _> =
            serde_json::from_str(r#"{"boardId": 9}"#);
        assert!(result.is_err());
    }
}
