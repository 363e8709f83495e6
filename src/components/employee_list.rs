//! Employee List Component

use leptos::prelude::*;
use todo_admin_core::domain::{Employee, EmployeeSort, SortField};

use crate::components::{DeleteConfirmButton, Pagination, SearchBar, SortHeader};
use crate::context::use_app_context;
use crate::list_controller::ListController;

#[component]
pub fn EmployeeList() -> impl IntoView {
    let ctx = use_app_context();
    let list = ListController::<Employee>::new(ctx);
    list.mount();

    let sort_header = move |field: EmployeeSort| view! {
        <SortHeader
            label=field.label()
            arrow=Signal::derive(move || list.arrow_for(field))
            on_toggle=Callback::new(move |_| list.toggle_sort(field))
        />
    };

    let row = move |employee: Employee| {
        let id = employee.id;
        let name = format!("{} {}", employee.first_name, employee.last_name);
        let department = employee.department_label().to_string();
        view! {
            <tr>
                <td>{employee.first_name}</td>
                <td>{employee.last_name}</td>
                <td>{employee.email}</td>
                <td>{department}</td>
                <Show when=move || ctx.is_admin()>
                    <td>
                        {id.map(|id| view! {
                            <a class="btn btn-info" href=format!("/edit-employee/{}", id)>"Update"</a>
                            <DeleteConfirmButton
                                record_label=name.clone()
                                deleting=Signal::derive(move || list.is_deleting(id))
                                locked=Signal::derive(move || list.delete_pending())
                                on_confirm=Callback::new(move |_| list.remove(id))
                            />
                        })}
                    </td>
                </Show>
            </tr>
        }
    };

    view! {
        <div class="container">
            <h2>"List of Employees"</h2>
            <Show when=move || ctx.is_admin()>
                <a class="btn btn-primary" href="/add-employee">"Add Employee"</a>
            </Show>
            <SearchBar
                placeholder="Search by name or department..."
                value=Signal::derive(move || list.search())
                on_search=Callback::new(move |term| list.set_search(term))
            />
            {move || list.error().map(|e| view! { <p class="error">{e}</p> })}
            <table>
                <thead>
                    <tr>
                        {sort_header(EmployeeSort::FirstName)}
                        {sort_header(EmployeeSort::LastName)}
                        <th>"Employee Email"</th>
                        <th>"Department Name"</th>
                        <Show when=move || ctx.is_admin()>
                            <th>"Actions"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody>
                    {move || list.rows().into_iter().map(row).collect_view()}
                </tbody>
            </table>
            <Pagination
                page_count=Signal::derive(move || list.page_count())
                current=Signal::derive(move || list.current_page())
                on_select=Callback::new(move |page| list.go_to_page(page))
            />
        </div>
    }
}
