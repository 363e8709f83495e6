//! Register Component
//!
//! Shows the success notice for the configured delay, then opens login.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use todo_admin_core::api::AuthApi;
use todo_admin_core::form::{submit, FormState, RegistrationDraft};
use todo_admin_core::scope::ViewScope;

use crate::components::{FormMessages, TextField};
use crate::context::use_app_context;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let draft = RwSignal::new(RegistrationDraft::default());
    let form = RwSignal::new(FormState::new());
    let scope = StoredValue::new(ViewScope::new());
    on_cleanup(move || scope.with_value(ViewScope::cancel));

    let handle_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let api = ctx.api();
        let scope = scope.get_value();
        let delay = ctx.config().success_redirect_delay_ms();
        let navigate = navigate.clone();
        form.update(FormState::begin);

        spawn_local(async move {
            let client = &api;
            let attempt = submit(&current, |request| async move { client.register(&request).await });
            let Some(outcome) = scope.run(attempt).await else { return };
            if !form.try_update(|f| f.apply(&outcome)).unwrap_or(false) {
                return;
            }

            form.update(|f| f.set_notice("Registration successful!"));
            TimeoutFuture::new(delay).await;
            if scope.is_active() {
                navigate("/login", Default::default());
            }
        });
    };

    view! {
        <div class="card">
            <h2>"User Registration Form"</h2>
            <form on:submit=handle_register>
                <TextField
                    label="Name"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                />
                <TextField
                    label="Username"
                    value=Signal::derive(move || draft.with(|d| d.username.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.username = v))
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || draft.with(|d| d.email.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.email = v))
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
