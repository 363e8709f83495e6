//! Todo Form Component
//!
//! `/add-todo` creates, `/update-todo/:id` prefills and updates.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use todo_admin_core::domain::Todo;
use todo_admin_core::form::TodoDraft;

use crate::components::{FormMessages, TextField};
use crate::context::use_app_context;
use crate::record_form::RecordForm;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let form = RecordForm::<Todo, TodoDraft>::new(ctx, TodoDraft::from_record);
    let draft = form.draft;

    let save_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        form.save(move || navigate("/todos", Default::default()));
    };

    view! {
        <div class="card">
            <h2>{move || form.heading("Todo")}</h2>
            <form on:submit=save_todo>
                <TextField
                    label="Todo Title"
                    value=Signal::derive(move || draft.with(|d| d.title.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.title = v))
                />
                <TextField
                    label="Todo Description"
                    value=Signal::derive(move || draft.with(|d| d.description.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.description = v))
                />
                <label class="form-row">
                    <span class="form-label">"Todo Completed"</span>
                    <select
                        prop:value=move || draft.with(|d| if d.completed { "true" } else { "false" })
                        on:change=move |ev| {
                            let completed = event_target_value(&ev) == "true";
                            draft.update(|d| d.completed = completed);
                        }
                    >
                        <option value="false">"No"</option>
                        <option value="true">"Yes"</option>
                    </select>
                </label>
                <FormMessages state=form.state />
                <button type="submit" disabled=move || form.state.with(|s| s.is_submitting())>"Submit"</button>
            </form>
        </div>
    }
}
