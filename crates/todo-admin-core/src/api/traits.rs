//! API Client - Core Traits
//!
//! Declared `?Send`: in the browser every future runs on the single UI
//! thread and `reqwest`'s WASM futures are not `Send`.

use async_trait::async_trait;

use super::error::ApiResult;
use crate::domain::{Entity, LoginRequest, LoginResponse, RecordId, RegisterRequest, Todo};

/// CRUD operations for one resource
#[async_trait(?Send)]
pub trait ResourceApi<T: Entity> {
    /// Fetch the full, unpaginated collection
    async fn list(&self) -> ApiResult<Vec<T>>;

    async fn get(&self, id: RecordId) -> ApiResult<T>;

    /// Create a record; the server assigns its id
    async fn create(&self, record: &T) -> ApiResult<T>;

    async fn update(&self, id: RecordId, record: &T) -> ApiResult<T>;

    async fn delete(&self, id: RecordId) -> ApiResult<()>;
}

/// Todo completion toggles
#[async_trait(?Send)]
pub trait TodoStatusApi {
    async fn complete(&self, id: RecordId) -> ApiResult<Todo>;

    async fn incomplete(&self, id: RecordId) -> ApiResult<Todo>;
}

/// Registration and login
#[async_trait(?Send)]
pub trait AuthApi {
    /// Returns the server's confirmation message
    async fn register(&self, request: &RegisterRequest) -> ApiResult<String>;

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
}
