use leptos::prelude::*;
use todo_admin_core::form::FormState;

/// The form's single error or notice line
#[component]
pub fn FormMessages(#[prop(into)] state: Signal<FormState>) -> impl IntoView {
    view! {
        {move || state.with(|s| s.error().map(|e| view! { <p class="error">{e.to_string()}</p> }))}
        {move || state.with(|s| s.notice().map(|n| view! { <p class="notice">{n.to_string()}</p> }))}
    }
}
