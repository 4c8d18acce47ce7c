//! Pagination Controls Component
//!
//! Page-size selector plus Previous/Next navigation. Holds no state of
//! its own; everything is delegated to the application root through
//! callbacks.

use leptos::*;

/// Fixed page-size choices; "All" is appended with the current total
/// item count as its value.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 20];

fn page_label(current_page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", current_page, total_pages)
}

/// Pagination controls
#[component]
pub fn PaginationControls(
    #[prop(into)] items_per_page: Signal<u32>,
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] total_items: Signal<u32>,
    /// Called with the newly selected page size
    on_page_size_change: Callback<u32>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <div>
                <label for="itemsPerPage">"Items per page: "</label>
                <select
                    id="itemsPerPage"
                    class="items-per-page-select"
                    prop:value=move || items_per_page.get().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            on_page_size_change.call(size);
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|&size| view! {
                        <option value=size.to_string()>{size.to_string()}</option>
                    }).collect_view()}
                    // "All" requests a page size equal to the full result
                    // size known at render time
                    <option value=move || total_items.get().to_string()>"All"</option>
                </select>
            </div>

            <div class="pagination-buttons">
                <button
                    on:click=move |_| on_previous.call(())
                    disabled=move || current_page.get() <= 1
                >
                    "Previous"
                </button>
                <span class="page-info">
                    {move || page_label(current_page.get(), total_pages.get())}
                </span>
                <button
                    on:click=move |_| on_next.call(())
                    disabled=move || current_page.get() >= total_pages.get()
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
