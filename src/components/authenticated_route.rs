//! Authenticated Route Component
//!
//! Mounts its children only when the gate grants the current path.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use todo_admin_core::routes::{resolve, Resolution};

use crate::context::use_app_context;

/// Each route mount creates its own gate, so only a session change
/// re-evaluates it. A denied visit redirects before the child view is
/// created, so the child never issues a request.
#[component]
pub fn AuthenticatedRoute(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();

    move || {
        ctx.session_version.track();
        let path = location.pathname.get_untracked();
        match resolve(&path, &ctx.session()) {
            Resolution::Redirect(target) => view! { <Redirect path=target.path() /> }.into_any(),
            Resolution::Render(_) | Resolution::NotFound => children().into_any(),
        }
    }
}
