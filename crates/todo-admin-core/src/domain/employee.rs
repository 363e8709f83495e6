//! Employee Entity
//!
//! `department_name` is joined in by the server on reads and is never
//! required when writing.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Listable, RecordId, Resource, SortField};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

impl Employee {
    pub fn department_label(&self) -> &str {
        self.department_name.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSort {
    FirstName,
    LastName,
}

impl SortField for EmployeeSort {
    fn label(&self) -> &'static str {
        match self {
            EmployeeSort::FirstName => "First Name",
            EmployeeSort::LastName => "Last Name",
        }
    }
}

impl Entity for Employee {
    const RESOURCE: Resource = Resource::Employee;

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Listable for Employee {
    type Sort = EmployeeSort;

    const DEFAULT_SORT: EmployeeSort = EmployeeSort::FirstName;

    fn sort_value(&self, field: EmployeeSort) -> &str {
        match field {
            EmployeeSort::FirstName => &self.first_name,
            EmployeeSort::LastName => &self.last_name,
        }
    }

    fn search_values(&self) -> Vec<&str> {
        vec![self.first_name.as_str(), self.last_name.as_str(), self.department_label()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_with_department_projection() {
        let raw = r#"{"id":3,"firstName":"Ada","lastName":"Lovelace","email":"ada@x.io","departmentId":2,"departmentName":"Math"}"#;
        let emp: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(emp.department_id, Some(2));
        assert_eq!(emp.search_values(), vec!["Ada", "Lovelace", "Math"]);
    }

    #[test]
    fn test_missing_department_name_searches_as_empty() {
        let emp = Employee {
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            ..Default::default()
        };
        assert_eq!(emp.department_label(), "");
    }
}
