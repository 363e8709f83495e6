//! Employee Form Component
//!
//! Department picker is filled from the department list on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use todo_admin_core::api::ResourceApi;
use todo_admin_core::domain::{Department, Employee, RecordId};
use todo_admin_core::form::EmployeeDraft;
use todo_admin_core::scope::ViewScope;

use crate::components::{FormMessages, TextField};
use crate::context::use_app_context;
use crate::record_form::RecordForm;

#[component]
pub fn EmployeeForm() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let form = RecordForm::<Employee, EmployeeDraft>::new(ctx, EmployeeDraft::from_record);
    let draft = form.draft;

    let (departments, set_departments) = signal(Vec::<Department>::new());
    let scope = ViewScope::new();
    let cleanup_scope = scope.clone();
    on_cleanup(move || cleanup_scope.cancel());

    let api = ctx.api();
    spawn_local(async move {
        let Some(result) = scope.run(async { ResourceApi::<Department>::list(&api).await }).await else {
            return;
        };
        ctx.observe(&result);
        match result {
            Ok(loaded) => set_departments.set(loaded),
            Err(err) => log::error!("failed to load departments: {}", err),
        }
    });

    let save_employee = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        form.save(move || navigate("/employees", Default::default()));
    };

    view! {
        <div class="card">
            <h2>{move || form.heading("Employee")}</h2>
            <form on:submit=save_employee>
                <TextField
                    label="First Name"
                    value=Signal::derive(move || draft.with(|d| d.first_name.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.first_name = v))
                />
                <TextField
                    label="Last Name"
                    value=Signal::derive(move || draft.with(|d| d.last_name.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.last_name = v))
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || draft.with(|d| d.email.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.email = v))
                />
                <label class="form-row">
                    <span class="form-label">"Select Department"</span>
                    <select
                        prop:value=move || draft.with(|d| d.department_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let department_id = event_target_value(&ev).parse::<RecordId>().ok();
                            draft.update(|d| d.department_id = department_id);
                        }
                    >
                        <option value="">"Select Department"</option>
                        {move || departments.get().into_iter().filter_map(|department| {
                            let id = department.id?;
                            Some(view! {
                                <option
                                    value=id.to_string()
                                    selected=move || draft.with(|d| d.department_id == Some(id))
                                >
                                    {department.department_name}
                                </option>
                            })
                        }).collect_view()}
                    </select>
                </label>
                <FormMessages state=form.state />
                <button type="submit" disabled=move || form.state.with(|s| s.is_submitting())>"Submit"</button>
            </form>
        </div>
    }
}
