use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <span>"All rights reserved 2024 by Todo Admin"</span>
        </footer>
    }
}
