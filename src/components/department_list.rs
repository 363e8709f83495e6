//! Department List Component

use leptos::prelude::*;
use todo_admin_core::domain::{Department, DepartmentSort, SortField};

use crate::components::{DeleteConfirmButton, Pagination, SearchBar, SortHeader};
use crate::context::use_app_context;
use crate::list_controller::ListController;

#[component]
pub fn DepartmentList() -> impl IntoView {
    let ctx = use_app_context();
    let list = ListController::<Department>::new(ctx);
    list.mount();

    let row = move |department: Department| {
        let id = department.id;
        let name = department.department_name.clone();
        view! {
            <tr>
                <td>{department.department_name}</td>
                <td>{department.department_description}</td>
                <Show when=move || ctx.is_admin()>
                    <td>
                        {id.map(|id| view! {
                            <a class="btn btn-info" href=format!("/edit-department/{}", id)>"Update"</a>
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
            <h2>"List of Departments"</h2>
            <Show when=move || ctx.is_admin()>
                <a class="btn btn-primary" href="/add-department">"Add Department"</a>
            </Show>
            <SearchBar
                placeholder="Search departments..."
                value=Signal::derive(move || list.search())
                on_search=Callback::new(move |term| list.set_search(term))
            />
            {move || list.error().map(|e| view! { <p class="error">{e}</p> })}
            <table>
                <thead>
                    <tr>
                        <SortHeader
                            label=DepartmentSort::Name.label()
                            arrow=Signal::derive(move || list.arrow_for(DepartmentSort::Name))
                            on_toggle=Callback::new(move |_| list.toggle_sort(DepartmentSort::Name))
                        />
                        <th>"Department Description"</th>
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
