//! Login Component
//!
//! Signs in and stores the session, then opens the todo list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use todo_admin_core::api::AuthApi;
use todo_admin_core::form::{submit, FormState, LoginDraft, Submission};
use todo_admin_core::scope::ViewScope;

use crate::components::{FormMessages, TextField};
use crate::context::use_app_context;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let draft = RwSignal::new(LoginDraft::default());
    let form = RwSignal::new(FormState::new());
    let scope = StoredValue::new(ViewScope::new());
    on_cleanup(move || scope.with_value(ViewScope::cancel));

    let handle_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let api = ctx.api();
        let scope = scope.get_value();
        let navigate = navigate.clone();
        form.update(FormState::begin);

        spawn_local(async move {
            let client = &api;
            let attempt = submit(&current, |request| async move { client.login(&request).await });
            let Some(outcome) = scope.run(attempt).await else { return };
            if let Submission::Saved(response) = &outcome {
                ctx.sign_in(response);
            }
            if form.try_update(|f| f.apply(&outcome)).unwrap_or(false) {
                navigate("/todos", Default::default());
            }
        });
    };

    view! {
        <div class="card">
            <h2>"Login Form"</h2>
            <form on:submit=handle_login>
                <TextField
                    label="Username or Email"
                    value=Signal::derive(move || draft.with(|d| d.username_or_email.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.username_or_email = v))
                />
                <TextField
                    label="Password"
                    input_type="password"
                    value=Signal::derive(move || draft.with(|d| d.password.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.password = v))
                />
                <FormMessages state=form />
                <button type="submit" disabled=move || form.with(|f| f.is_submitting())>"Submit"</button>
            </form>
        </div>
    }
}
