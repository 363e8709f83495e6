//! Form View & validation
//!
//! Drafts hold raw field text. Validation runs in a fixed order and stops at
//! the first failure; the API is only called once a draft is clean.

mod validation;
mod drafts;
mod submit;

pub use validation::{
    require_all, require_department, require_email, require_min_len, require_name_parts, ValidationError,
    MIN_PASSWORD_LEN, MIN_USERNAME_LEN,
};
pub use drafts::{DepartmentDraft, Draft, EmployeeDraft, LoginDraft, RegistrationDraft, TodoDraft};
pub use submit::{save_record, submit, FormMode, FormState, Submission};
