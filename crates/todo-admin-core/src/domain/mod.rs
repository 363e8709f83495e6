//! Domain Layer
//!
//! Typed records exchanged with the remote API and the contracts the list
//! pipeline relies on. No I/O lives here.

mod entity;
mod todo;
mod employee;
mod department;
mod auth;

pub use entity::{Entity, Listable, RecordId, Resource, SortField};
pub use todo::{Todo, TodoSort};
pub use employee::{Employee, EmployeeSort};
pub use department::{Department, DepartmentSort};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest, Role};
