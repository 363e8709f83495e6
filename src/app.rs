//! Todo Admin Frontend App
//!
//! Session and configuration setup plus the route table.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use todo_admin_core::config::AppConfig;
use todo_admin_core::session::SessionContext;

use crate::components::{
    AuthenticatedRoute, DepartmentForm, DepartmentList, EmployeeForm, EmployeeList, Footer, Header, Login,
    Register, TodoForm, TodoList,
};
use crate::context::AppContext;
use crate::storage::BrowserSessionStore;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env().unwrap_or_else(|err| {
        log::error!("invalid configuration, falling back to defaults: {}", err);
        AppConfig::default()
    });
    log::info!("using API at {}", config.api_base_url());

    let session = SessionContext::load(Arc::new(BrowserSessionStore));
    let (session_version, set_session_version) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(session, config, (session_version, set_session_version)));

    view! {
        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| view! { <p class="error">"Page not found."</p> }>
                    <Route path=path!("/") view=Login />
                    <Route path=path!("/login") view=Login />
                    <Route path=path!("/register") view=Register />
                    <Route
                        path=path!("/todos")
                        view=|| view! { <AuthenticatedRoute><TodoList /></AuthenticatedRoute> }
                    />
                    <Route
                        path=path!("/add-todo")
                        view=|| view! { <AuthenticatedRoute><TodoForm /></AuthenticatedRoute> }
                    />
                    <Route
                        path=path!("/update-todo/:id")
                        view=|| view! { <AuthenticatedRoute><TodoForm /></AuthenticatedRoute> }
                    />
                    <Route
                        path=path!("/employees")
                        view=|| view! { <AuthenticatedRoute><EmployeeList /></AuthenticatedRoute> }
                    />
                    <Route
                        path=path!("/add-employee")
                        view=|| view! { <AuthenticatedRoute><EmployeeForm /></AuthenticatedRoute> }
                    />
                    <Route
                        path=path!("/edit-employee/:id")
                        view=|| view! { <AuthenticatedRoute><EmployeeForm /></AuthenticatedRoute> }
                    />
                    <Route
                        path=path!("/departments")
                        view=|| view! { <AuthenticatedRoute><DepartmentList /></AuthenticatedRoute> }
                    />
                    <Route
                        path=path!("/add-department")
                        view=|| view! { <AuthenticatedRoute><DepartmentForm /></AuthenticatedRoute> }
                    />
                    <Route
                        path=path!("/edit-department/:id")
                        view=|| view! { <AuthenticatedRoute><DepartmentForm /></AuthenticatedRoute> }
                    />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
