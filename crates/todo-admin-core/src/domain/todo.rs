//! Todo Entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Listable, RecordId, Resource, SortField};

/// A todo item as served by `/api/todos`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Todo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoSort {
    Title,
}

impl SortField for TodoSort {
    fn label(&self) -> &'static str {
        match self {
            TodoSort::Title => "Todo Title",
        }
    }
}

impl Entity for Todo {
    const RESOURCE: Resource = Resource::Todo;

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Listable for Todo {
    type Sort = TodoSort;

    const DEFAULT_SORT: TodoSort = TodoSort::Title;

    fn sort_value(&self, field: TodoSort) -> &str {
        match field {
            TodoSort::Title => &self.title,
        }
    }

    fn search_values(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}
