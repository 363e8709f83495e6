//! Todo Admin Core
//!
//! Everything the admin front end does that does not touch the DOM:
//! - domain: Records exchanged with the server
//! - session: Bearer token and role, injected rather than global
//! - api: Client traits with an HTTP and an in-memory implementation
//! - list: Sort / filter / paginate pipeline and list view state
//! - form: Drafts, validation and submission
//! - routes: Route table and the auth gate

pub mod api;
pub mod config;
pub mod domain;
pub mod form;
pub mod list;
pub mod routes;
pub mod scope;
pub mod session;
