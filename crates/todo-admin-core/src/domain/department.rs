//! Department Entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Listable, RecordId, Resource, SortField};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Department {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub department_name: String,
    pub department_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentSort {
    Name,
}

impl SortField for DepartmentSort {
    fn label(&self) -> &'static str {
        match self {
            DepartmentSort::Name => "Department Name",
        }
    }
}

impl Entity for Department {
    const RESOURCE: Resource = Resource::Department;

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Listable for Department {
    type Sort = DepartmentSort;

    const DEFAULT_SORT: DepartmentSort = DepartmentSort::Name;

    fn sort_value(&self, field: DepartmentSort) -> &str {
        match field {
            DepartmentSort::Name => &self.department_name,
        }
    }

    fn search_values(&self) -> Vec<&str> {
        vec![self.department_name.as_str(), self.department_description.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_wire_names() {
        let raw = r#"{"id":7,"departmentName":"R&D","departmentDescription":"Research"}"#;
        let dept: Department = serde_json::from_str(raw).unwrap();
        assert_eq!(dept.id(), Some(7));
        assert_eq!(dept.sort_value(DepartmentSort::Name), "R&D");
    }
}
