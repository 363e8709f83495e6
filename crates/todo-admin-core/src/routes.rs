//! Route table and authenticated-route gate
//!
//! Paths are matched exactly. The gate runs synchronously on every
//! navigation and is never cached.

use std::fmt;

use crate::domain::RecordId;
use crate::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Todos,
    AddTodo,
    UpdateTodo(RecordId),
    Employees,
    AddEmployee,
    EditEmployee(RecordId),
    Departments,
    AddDepartment,
    EditDepartment(RecordId),
}

impl Route {
    /// Route patterns in router syntax
    pub const PATTERNS: [&'static str; 12] = [
        "/",
        "/login",
        "/register",
        "/todos",
        "/add-todo",
        "/update-todo/:id",
        "/employees",
        "/add-employee",
        "/edit-employee/:id",
        "/departments",
        "/add-department",
        "/edit-department/:id",
    ];

    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let segments: Vec<&str> = path
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["todos"] => Route::Todos,
            ["add-todo"] => Route::AddTodo,
            ["update-todo", id] => Route::UpdateTodo(id.parse().ok()?),
            ["employees"] => Route::Employees,
            ["add-employee"] => Route::AddEmployee,
            ["edit-employee", id] => Route::EditEmployee(id.parse().ok()?),
            ["departments"] => Route::Departments,
            ["add-department"] => Route::AddDepartment,
            ["edit-department", id] => Route::EditDepartment(id.parse().ok()?),
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Todos => "/todos".to_string(),
            Route::AddTodo => "/add-todo".to_string(),
            Route::UpdateTodo(id) => format!("/update-todo/{}", id),
            Route::Employees => "/employees".to_string(),
            Route::AddEmployee => "/add-employee".to_string(),
            Route::EditEmployee(id) => format!("/edit-employee/{}", id),
            Route::Departments => "/departments".to_string(),
            Route::AddDepartment => "/add-department".to_string(),
            Route::EditDepartment(id) => format!("/edit-department/{}", id),
        }
    }

    /// Everything but the entry, login and registration views needs a session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Home | Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Gate decision for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted(Route),
    Redirect(Route),
}

/// Decide whether `route` may mount for the current session
pub fn authorize(route: Route, session: &SessionContext) -> Access {
    if route.requires_auth() && !session.is_authenticated() {
        log::debug!("redirecting unauthenticated visit to {}", route);
        Access::Redirect(Route::Home)
    } else {
        Access::Granted(route)
    }
}

/// Outcome of resolving a raw URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
    NotFound,
}

pub fn resolve(path: &str, session: &SessionContext) -> Resolution {
    match Route::parse(path) {
        None => Resolution::NotFound,
        Some(route) => match authorize(route, session) {
            Access::Granted(route) => Resolution::Render(route),
            Access::Redirect(target) => Resolution::Redirect(target),
        },
    }
}
