//! Header Component
//!
//! Top navigation; links depend on whether someone is signed in.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let logout = move |_| {
        ctx.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <header class="app-header">
            <span class="brand">"Todo Management Application"</span>
            <Show when=move || ctx.is_authenticated()>
                <A href="/todos">"Todos"</A>
                <A href="/employees">"Employees"</A>
                <A href="/departments">"Departments"</A>
            </Show>
            <Show
                when=move || ctx.is_authenticated()
                fallback=|| view! {
                    <A href="/register">"Register"</A>
                    <A href="/login">"Login"</A>
                }
            >
                <button class="logout-btn" on:click=logout.clone()>"Logout"</button>
            </Show>
        </header>
    }
}
