//! Department Form Component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use todo_admin_core::domain::Department;
use todo_admin_core::form::DepartmentDraft;

use crate::components::{FormMessages, TextField};
use crate::context::use_app_context;
use crate::record_form::RecordForm;

#[component]
pub fn DepartmentForm() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let form = RecordForm::<Department, DepartmentDraft>::new(ctx, DepartmentDraft::from_record);
    let draft = form.draft;

    let save_department = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        form.save(move || navigate("/departments", Default::default()));
    };

    view! {
        <div class="card">
            <h2>{move || form.heading("Department")}</h2>
            <form on:submit=save_department>
                <TextField
                    label="Department Name"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                />
                <TextField
                    label="Department Description"
                    value=Signal::derive(move || draft.with(|d| d.description.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.description = v))
                />
                <FormMessages state=form.state />
                <button type="submit" disabled=move || form.state.with(|s| s.is_submitting())>"Submit"</button>
            </form>
        </div>
    }
}
