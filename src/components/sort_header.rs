//! Sortable Column Header

use leptos::prelude::*;

#[component]
pub fn SortHeader(
    label: &'static str,
    #[prop(into)] arrow: Signal<Option<&'static str>>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <th
            class="sortable"
            title=format!("Click to sort by {}", label)
            on:click=move |_| on_toggle.run(())
        >
            {label} " " {move || arrow.get().unwrap_or_default()}
        </th>
    }
}
