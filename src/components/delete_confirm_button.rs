//! Delete Confirm Button Component
//!
//! Two-step delete for a list row: ask first, then stay locked while the
//! delete and the list refresh run.

use leptos::prelude::*;

/// # Arguments
/// * `record_label` - Shown in the prompt, e.g. "Delete Finance?"
/// * `deleting` - True while this row's delete is in flight
/// * `locked` - True while any delete in the list is in flight
/// * `on_confirm` - Starts the delete
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] record_label: String,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] locked: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let asking = RwSignal::new(false);
    let prompt = format!("Delete {}?", record_label);

    view! {
        <Show
            when=move || asking.get() || deleting.get()
            fallback=move || view! {
                <button
                    class="btn btn-danger"
                    disabled=move || locked.get()
                    on:click=move |_| asking.set(true)
                >
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    {
                        let prompt = prompt.clone();
                        move || if deleting.get() { "Deleting...".to_string() } else { prompt.clone() }
                    }
                </span>
                <button
                    class="confirm-btn"
                    disabled=move || locked.get()
                    on:click=move |_| {
                        asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    disabled=move || deleting.get()
                    on:click=move |_| asking.set(false)
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
