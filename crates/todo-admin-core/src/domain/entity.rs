//! Domain Layer - Core Entity Trait
//!
//! Every CRUD-managed record is addressed by a server-assigned id and lives
//! under one API resource path.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Identifier assigned by the remote API. The client never generates one.
pub type RecordId = u64;

/// The three CRUD-managed resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Todo,
    Employee,
    Department,
}

impl Resource {
    /// Collection endpoint relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Todo => "/api/todos",
            Resource::Employee => "/api/employees",
            Resource::Department => "/api/departments",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Todo => "todo",
            Resource::Employee => "employee",
            Resource::Department => "department",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core trait for all records served by the API
pub trait Entity: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Resource this record type belongs to
    const RESOURCE: Resource;

    /// Server-assigned id; `None` until the record has been created
    fn id(&self) -> Option<RecordId>;
}

/// A column a list view can sort by
pub trait SortField: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Column header text
    fn label(&self) -> &'static str;
}

/// Records that can be shown in a sortable, searchable, paginated list
pub trait Listable: Entity {
    type Sort: SortField;

    /// Sort field selected when a list view first mounts
    const DEFAULT_SORT: Self::Sort;

    /// Raw value of the given sort column
    fn sort_value(&self, field: Self::Sort) -> &str;

    /// Values the search term is matched against
    fn search_values(&self) -> Vec<&str>;
}
