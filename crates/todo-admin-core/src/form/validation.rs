//! Field checks shared by every form

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::RecordId;

pub const MIN_USERNAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 4;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// The single message a form shows when a draft is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),

    #[error("Name must have at least two parts.")]
    NameParts,

    #[error("{field} must have at least {min} symbols.")]
    TooShort { field: &'static str, min: usize },

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Select a department.")]
    DepartmentMissing,
}

/// First blank field wins. Whitespace-only counts as blank.
pub fn require_all(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((label, _)) => Err(ValidationError::Required(*label)),
        None => Ok(()),
    }
}

pub fn require_min_len(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        Err(ValidationError::TooShort { field, min })
    } else {
        Ok(())
    }
}

/// At least two non-empty space-separated parts
pub fn require_name_parts(value: &str) -> Result<(), ValidationError> {
    if value.split_whitespace().count() < 2 {
        Err(ValidationError::NameParts)
    } else {
        Ok(())
    }
}

pub fn require_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn require_department(id: Option<RecordId>) -> Result<(), ValidationError> {
    id.map(|_| ()).ok_or(ValidationError::DepartmentMissing)
}
