//! Form drafts
//!
//! Raw field values as typed by the user, one struct per form.

use crate::domain::{
    Department, Employee, LoginRequest, RecordId, RegisterRequest, Todo,
};

use super::validation::{
    require_all, require_department, require_email, require_min_len, require_name_parts,
    ValidationError, MIN_PASSWORD_LEN, MIN_USERNAME_LEN,
};

/// A form's field values plus the rules that gate submission
pub trait Draft {
    /// What gets sent to the API once the draft is valid
    type Payload;

    /// Checks in fixed order; the first failure is returned
    fn validate(&self) -> Result<(), ValidationError>;

    fn payload(&self) -> Self::Payload;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoDraft {
    pub fn from_record(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.completed,
        }
    }
}

impl Draft for TodoDraft {
    type Payload = Todo;

    fn validate(&self) -> Result<(), ValidationError> {
        require_all(&[("Title", self.title.as_str()), ("Description", self.description.as_str())])
    }

    fn payload(&self) -> Todo {
        Todo {
            id: None,
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<RecordId>,
}

impl EmployeeDraft {
    pub fn from_record(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department_id: employee.department_id,
        }
    }
}

impl Draft for EmployeeDraft {
    type Payload = Employee;

    fn validate(&self) -> Result<(), ValidationError> {
        require_all(&[
            ("First name", self.first_name.as_str()),
            ("Last name", self.last_name.as_str()),
            ("Email", self.email.as_str()),
        ])?;
        require_department(self.department_id)?;
        require_email(&self.email)
    }

    fn payload(&self) -> Employee {
        Employee {
            id: None,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department_id: self.department_id,
            department_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentDraft {
    pub name: String,
    pub description: String,
}

impl DepartmentDraft {
    pub fn from_record(department: &Department) -> Self {
        Self {
            name: department.department_name.clone(),
            description: department.department_description.clone(),
        }
    }
}

impl Draft for DepartmentDraft {
    type Payload = Department;

    fn validate(&self) -> Result<(), ValidationError> {
        require_all(&[
            ("Department name", self.name.as_str()),
            ("Department description", self.description.as_str()),
        ])
    }

    fn payload(&self) -> Department {
        Department {
            id: None,
            department_name: self.name.clone(),
            department_description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Draft for RegistrationDraft {
    type Payload = RegisterRequest;

    /// required → username length → email shape → name parts → password length
    fn validate(&self) -> Result<(), ValidationError> {
        require_all(&[
            ("Name", self.name.as_str()),
            ("Username", self.username.as_str()),
            ("Email", self.email.as_str()),
            ("Password", self.password.as_str()),
        ])?;
        require_min_len("Username", &self.username, MIN_USERNAME_LEN)?;
        require_email(&self.email)?;
        require_name_parts(&self.name)?;
        require_min_len("Password", &self.password, MIN_PASSWORD_LEN)
    }

    fn payload(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub username_or_email: String,
    pub password: String,
}

impl Draft for LoginDraft {
    type Payload = LoginRequest;

    fn validate(&self) -> Result<(), ValidationError> {
        require_all(&[
            ("Username or email", self.username_or_email.as_str()),
            ("Password", self.password.as_str()),
        ])
    }

    fn payload(&self) -> LoginRequest {
        LoginRequest {
            username_or_email: self.username_or_email.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, username: &str, email: &str, password: &str) -> RegistrationDraft {
        RegistrationDraft {
            name: name.into(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_registration_bad_email_reported_before_password() {
        let draft = registration("John", "jo", "bad", "1234");
        assert_eq!(draft.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_registration_order() {
        assert_eq!(registration("", "jo", "bad", "1").validate(), Err(ValidationError::Required("Name")));
        assert_eq!(
            registration("John Doe", "j", "bad", "1").validate(),
            Err(ValidationError::TooShort { field: "Username", min: 2 })
        );
        assert_eq!(registration("John", "jo", "j@d.com", "1234").validate(), Err(ValidationError::NameParts));
        assert_eq!(
            registration("John Doe", "jo", "j@d.com", "123").validate(),
            Err(ValidationError::TooShort { field: "Password", min: 4 })
        );
        assert_eq!(registration("John Doe", "jd", "j@d.com", "abcd").validate(), Ok(()));
    }

    #[test]
    fn test_employee_checks() {
        let mut draft = EmployeeDraft {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada".into(),
            department_id: None,
        };
        assert_eq!(draft.validate(), Err(ValidationError::DepartmentMissing));
        draft.department_id = Some(1);
        assert_eq!(draft.validate(), Err(ValidationError::InvalidEmail));
        draft.email = "ada@example.com".into();
        assert_eq!(draft.validate(), Ok(()));
        assert_eq!(draft.payload().department_id, Some(1));
    }

    #[test]
    fn test_todo_and_department_required() {
        let todo = TodoDraft { title: "t".into(), ..Default::default() };
        assert_eq!(todo.validate(), Err(ValidationError::Required("Description")));
        assert_eq!(
            DepartmentDraft::default().validate().unwrap_err().to_string(),
            "Department name is required."
        );
    }

    #[test]
    fn test_drafts_prefill_from_records() {
        let todo = Todo { id: Some(4), title: "a".into(), description: "b".into(), completed: true };
        let draft = TodoDraft::from_record(&todo);
        assert!(draft.completed);
        assert_eq!(draft.payload().id, None);
    }
}
