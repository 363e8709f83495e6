//! API Client
//!
//! One operation per resource and verb, behind traits so views can be
//! driven by the HTTP client in the browser and by the in-memory backend in
//! tests.

mod error;
mod traits;
mod http;
mod memory;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiResult};
pub use traits::{AuthApi, ResourceApi, TodoStatusApi};
pub use http::HttpApi;
pub use memory::{ApiCall, InMemoryApi};
