//! Async list actions
//!
//! Dependent calls are awaited in order; nothing here fires two requests
//! concurrently.

use thiserror::Error;

use crate::api::{ApiError, ApiResult, ResourceApi, TodoStatusApi};
use crate::domain::{Entity, RecordId, Todo};

/// Which half of a mutate-then-refresh sequence failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The server rejected the change; nothing was refreshed
    #[error("{0}")]
    Mutation(ApiError),
    /// The change went through but the follow-up `list()` failed
    #[error("{0}")]
    Refresh(ApiError),
}

impl MutationError {
    pub fn api_error(&self) -> &ApiError {
        match self {
            MutationError::Mutation(err) | MutationError::Refresh(err) => err,
        }
    }
}

/// Fetch the full collection
pub async fn reload<T, A>(api: &A) -> ApiResult<Vec<T>>
where
    T: Entity,
    A: ResourceApi<T> + ?Sized,
{
    api.list().await
}

/// Delete `id`, wait for it, then fetch the collection again. A failed
/// delete issues no refresh.
pub async fn delete_and_reload<T, A>(api: &A, id: RecordId) -> Result<Vec<T>, MutationError>
where
    T: Entity,
    A: ResourceApi<T> + ?Sized,
{
    log::info!("deleting {} {}", T::RESOURCE, id);
    api.delete(id).await.map_err(MutationError::Mutation)?;
    api.list().await.map_err(MutationError::Refresh)
}

/// Mark a todo complete or incomplete, then fetch the todo list again
pub async fn set_completed_and_reload<A>(
    api: &A,
    id: RecordId,
    completed: bool,
) -> Result<Vec<Todo>, MutationError>
where
    A: TodoStatusApi + ResourceApi<Todo> + ?Sized,
{
    let toggled = if completed {
        api.complete(id).await
    } else {
        api.incomplete(id).await
    };
    toggled.map_err(MutationError::Mutation)?;
    api.list().await.map_err(MutationError::Refresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiCall, ApiError, InMemoryApi};
    use crate::domain::Resource;
    use crate::list::{ListCommand, ListState};

    fn seeded() -> InMemoryApi {
        let api = InMemoryApi::new();
        api.seed_todos((1..=5).map(|i| Todo {
            id: Some(i),
            title: format!("todo {}", i),
            description: String::new(),
            completed: false,
        }));
        api
    }

    #[tokio::test]
    async fn test_delete_then_refresh_in_order() {
        let api = seeded();
        let mut state: ListState<Todo> = ListState::new(10);
        state.apply_fetch(reload(&api).await);
        assert_eq!(state.collection().len(), 5);

        state.apply_delete(3, delete_and_reload::<Todo, _>(&api, 3).await);

        assert_eq!(state.collection().len(), 4);
        assert!(state.collection().iter().all(|t| t.id != Some(3)));
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::List(Resource::Todo),
                ApiCall::Delete(Resource::Todo, 3),
                ApiCall::List(Resource::Todo),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_delete_skips_refresh() {
        let api = seeded();
        let mut state: ListState<Todo> = ListState::new(10);
        assert_eq!(state.mount(), ListCommand::Fetch);
        state.apply_fetch(reload(&api).await);

        api.fail_next(ApiError::Status { status: 403, message: "Forbidden".into() });
        let result = delete_and_reload::<Todo, _>(&api, 3).await;
        assert!(matches!(result, Err(MutationError::Mutation(_))));
        state.apply_delete(3, result);

        assert_eq!(state.collection().len(), 5);
        assert_eq!(state.error(), Some("Request failed: 403 - Forbidden"));
        assert_eq!(api.calls().last(), Some(&ApiCall::Delete(Resource::Todo, 3)));
    }

    #[tokio::test]
    async fn test_refresh_failure_after_delete_drops_the_row() {
        let api = seeded();
        let mut state: ListState<Todo> = ListState::new(10);
        state.apply_fetch(reload(&api).await);

        api.fail_on(ApiCall::List(Resource::Todo), ApiError::Transport("offline".into()));
        assert!(state.begin_delete(3));
        let result = delete_and_reload::<Todo, _>(&api, 3).await;
        assert_eq!(result, Err(MutationError::Refresh(ApiError::Transport("offline".into()))));
        state.apply_delete(3, result);

        assert_eq!(state.collection().len(), 4);
        assert!(state.collection().iter().all(|t| t.id != Some(3)));
        assert_eq!(state.error(), Some("Network error: offline"));
        assert!(!state.is_deleting(3));
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::List(Resource::Todo),
                ApiCall::Delete(Resource::Todo, 3),
                ApiCall::List(Resource::Todo),
            ]
        );
    }

    #[tokio::test]
    async fn test_complete_then_refresh() {
        let api = seeded();
        let todos = set_completed_and_reload(&api, 2, true).await.unwrap();
        assert!(todos.iter().find(|t| t.id == Some(2)).unwrap().completed);

        let todos = set_completed_and_reload(&api, 2, false).await.unwrap();
        assert!(!todos.iter().find(|t| t.id == Some(2)).unwrap().completed);
        assert_eq!(api.calls()[0], ApiCall::Complete(2));
        assert_eq!(api.calls()[1], ApiCall::List(Resource::Todo));
    }
}
