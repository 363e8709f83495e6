//! Form submission
//!
//! `submit` validates first and only then calls the API, exactly once.
//! `FormState` carries the single message the form shows.

use std::future::Future;

use crate::api::{ApiError, ApiResult, ResourceApi};
use crate::domain::{Entity, RecordId};

use super::drafts::Draft;
use super::validation::ValidationError;

/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn from_id(id: Option<RecordId>) -> Self {
        id.map(FormMode::Edit).unwrap_or(FormMode::Create)
    }

    pub fn id(&self) -> Option<RecordId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }

    /// Form heading, e.g. "Add Employee" / "Update Employee"
    pub fn heading(&self, noun: &str) -> String {
        match self {
            FormMode::Create => format!("Add {}", noun),
            FormMode::Edit(_) => format!("Update {}", noun),
        }
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    /// Validation failed; nothing was sent
    Rejected(ValidationError),
    Saved(T),
    Failed(ApiError),
}

impl<T> Submission<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Submission::Saved(_))
    }
}

/// Validate `draft`; if clean, hand its payload to `send` once
pub async fn submit<D, T, F, Fut>(draft: &D, send: F) -> Submission<T>
where
    D: Draft,
    F: FnOnce(D::Payload) -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    if let Err(err) = draft.validate() {
        log::debug!("form rejected: {}", err);
        return Submission::Rejected(err);
    }

    match send(draft.payload()).await {
        Ok(saved) => Submission::Saved(saved),
        Err(err) => {
            log::error!("form submission failed: {}", err);
            Submission::Failed(err)
        }
    }
}

/// Create or update a record from a draft, depending on `mode`
pub async fn save_record<T, A, D>(api: &A, mode: FormMode, draft: &D) -> Submission<T>
where
    T: Entity,
    A: ResourceApi<T> + ?Sized,
    D: Draft<Payload = T>,
{
    submit(draft, |record| async move {
        match mode {
            FormMode::Create => api.create(&record).await,
            FormMode::Edit(id) => api.update(id, &record).await,
        }
    })
    .await
}

/// Message state of a form view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    error: Option<String>,
    notice: Option<String>,
    submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.submitting = true;
        self.notice = None;
    }

    /// Record the outcome. Returns true when the record was saved.
    pub fn apply<T>(&mut self, outcome: &Submission<T>) -> bool {
        self.submitting = false;
        match outcome {
            Submission::Rejected(err) => {
                self.error = Some(err.to_string());
                false
            }
            Submission::Failed(err) => {
                self.error = Some(err.to_string());
                false
            }
            Submission::Saved(_) => {
                self.error = None;
                true
            }
        }
    }

    /// Surface a failure outside submission, e.g. prefilling an edit form
    pub fn fail(&mut self, err: &ApiError) {
        self.error = Some(err.to_string());
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}
