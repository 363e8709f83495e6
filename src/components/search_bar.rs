//! Search Bar Component

use leptos::prelude::*;

/// Text box feeding the list filter on every keystroke
#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="search-input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_search.run(event_target_value(&ev))
        />
    }
}
