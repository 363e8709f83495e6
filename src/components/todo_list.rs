//! Todo List Component
//!
//! Sortable, searchable, paginated todo table. Admins also get
//! add/update/delete controls.

use leptos::prelude::*;
use todo_admin_core::domain::{SortField, Todo, TodoSort};

use crate::components::{DeleteConfirmButton, Pagination, SearchBar, SortHeader};
use crate::context::use_app_context;
use crate::list_controller::ListController;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let list = ListController::<Todo>::new(ctx);
    list.mount();

    let row = move |todo: Todo| {
        let Todo { id, title, description, completed } = todo;
        let label = title.clone();
        view! {
            <tr>
                <td>{title}</td>
                <td>{description}</td>
                <td>{if completed { "YES" } else { "NO" }}</td>
                <td>
                    {id.map(|id| view! {
                        <Show when=move || ctx.is_admin()>
                            <a class="btn btn-info" href=format!("/update-todo/{}", id)>"Update"</a>
                            <DeleteConfirmButton
                                record_label=label.clone()
                                deleting=Signal::derive(move || list.is_deleting(id))
                                locked=Signal::derive(move || list.delete_pending())
                                on_confirm=Callback::new(move |_| list.remove(id))
                            />
                        </Show>
                        <button class="btn btn-success" on:click=move |_| list.set_completed(id, !completed)>
                            {if completed { "In Complete" } else { "Complete" }}
                        </button>
                    })}
                </td>
            </tr>
        }
    };

    view! {
        <div class="container">
            <h2>"List of Todos"</h2>
            <Show when=move || ctx.is_admin()>
                <a class="btn btn-primary" href="/add-todo">"Add Todo"</a>
            </Show>
            <SearchBar
                placeholder="Search todos..."
                value=Signal::derive(move || list.search())
                on_search=Callback::new(move |term| list.set_search(term))
            />
            {move || list.error().map(|e| view! { <p class="error">{e}</p> })}
            <table>
                <thead>
                    <tr>
                        <SortHeader
                            label=TodoSort::Title.label()
                            arrow=Signal::derive(move || list.arrow_for(TodoSort::Title))
                            on_toggle=Callback::new(move |_| list.toggle_sort(TodoSort::Title))
                        />
                        <th>"Todo Description"</th>
                        <th>"Todo Completed"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || list.rows().into_iter().map(row).collect_view()}
                </tbody>
            </table>
            <Show when=move || list.is_loading()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Pagination
                page_count=Signal::derive(move || list.page_count())
                current=Signal::derive(move || list.current_page())
                on_select=Callback::new(move |page| list.go_to_page(page))
            />
        </div>
    }
}
