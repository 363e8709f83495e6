//! Pagination Component

use leptos::prelude::*;

/// One button per page; the current page is highlighted
#[component]
pub fn Pagination(
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            {move || (1..=page_count.get()).map(|page| view! {
                <button
                    class=move || if current.get() == page { "page-btn active" } else { "page-btn" }
                    on:click=move |_| on_select.run(page)
                >
                    {page}
                </button>
            }).collect_view()}
        </nav>
    }
}
