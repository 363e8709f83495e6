//! Labelled Text Field

use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-row">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                placeholder=format!("Enter {}", label.to_lowercase())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
