//! App Root Component
//!
//! Owns the view preferences, the fetch cycle, and the filter/sort
//! controls; composes the card list and the pagination controls.

use leptos::*;

use crate::api;
use crate::components::{PaginationControls, PokemonCard};
use crate::state::global::{
    provide_global_state, FetchGeneration, GlobalState, SortOrder, Theme, TYPE_FILTERS,
};
use crate::state::prefs;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components, hydrated from storage
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let theme = state.theme;
    let current_page = state.current_page;

    // Persist theme and current page as reactions to state, so the
    // initial hydration is written back exactly like a user toggle.
    create_effect(move |_| {
        prefs::write(prefs::THEME_KEY, theme.get().as_str());
    });
    create_effect(move |_| {
        prefs::write(prefs::CURRENT_PAGE_KEY, &current_page.get().to_string());
    });

    // Fetch cycle: re-runs whenever a preference the query depends on
    // changes. Each request carries a generation stamp; a response is
    // applied only if it is still the newest request, so a slow earlier
    // fetch can never overwrite fresher state.
    let fetch_generation = FetchGeneration::new();
    let state_for_fetch = state.clone();
    create_effect(move |_| {
        let page = state_for_fetch.current_page.get();
        let page_size = state_for_fetch.items_per_page.get();
        let sort_order = state_for_fetch.sort_order.get();
        let selected_type = state_for_fetch.selected_type.get();

        let generation = fetch_generation.next();

        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::fetch_pokemon(page, page_size, sort_order, &selected_type).await {
                Ok(result) => {
                    if fetch_generation.is_latest(generation) {
                        state.apply_page(result);
                    }
                }
                Err(e) => {
                    // Stale data stays on screen; the failure is only logged
                    web_sys::console::error_1(
                        &format!("Error fetching Pokemon: {}", e).into(),
                    );
                }
            }
        });
    });

    let state_for_filter = state.clone();
    let on_filter_change = move |ev: web_sys::Event| {
        let ty = event_target_value(&ev);
        prefs::write(prefs::SELECTED_TYPE_KEY, &ty);
        state_for_filter.set_selected_type(ty);
    };

    let state_for_sort = state.clone();
    let on_sort_change = move |ev: web_sys::Event| {
        if let Some(order) = SortOrder::parse(&event_target_value(&ev)) {
            prefs::write(prefs::SORT_ORDER_KEY, order.as_str());
            state_for_sort.set_sort_order(order);
        }
    };

    let state_for_page_size = state.clone();
    let on_page_size_change = Callback::new(move |size: u32| {
        prefs::write(prefs::ITEMS_PER_PAGE_KEY, &size.to_string());
        state_for_page_size.set_items_per_page(size);
    });

    let state_for_prev = state.clone();
    let on_previous = Callback::new(move |_: ()| state_for_prev.go_to_previous_page());
    let state_for_next = state.clone();
    let on_next = Callback::new(move |_: ()| state_for_next.go_to_next_page());

    let state_for_theme = state.clone();
    let pokemon = state.pokemon;
    let selected_type = state.selected_type;
    let sort_order = state.sort_order;

    view! {
        <div class=move || format!("app {}-mode", theme.get().as_str())>
            <div class="card">
                <h1 class="header">"Pokedex"</h1>

                <button
                    class="theme-toggle-button"
                    on:click=move |_| state_for_theme.toggle_theme()
                >
                    {move || if theme.get() == Theme::Light { "☀️" } else { "🌙" }}
                </button>

                <div class="controls-top">
                    <div>
                        <label for="filterType">"Filter by Type: "</label>
                        <select
                            id="filterType"
                            class="items-per-page-select"
                            prop:value=move || selected_type.get()
                            on:change=on_filter_change
                        >
                            {TYPE_FILTERS.iter().map(|&ty| view! {
                                <option value=ty>{ty}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label for="sortOrder">"Sort by Number: "</label>
                        <select
                            id="sortOrder"
                            class="items-per-page-select"
                            prop:value=move || sort_order.get().as_str().to_string()
                            on:change=on_sort_change
                        >
                            <option value="asc">"Ascending"</option>
                            <option value="desc">"Descending"</option>
                        </select>
                    </div>
                </div>

                <div class="pokemon-list-container">
                    {move || {
                        pokemon.get().into_iter().map(|p| {
                            view! { <PokemonCard pokemon=p /> }
                        }).collect_view()
                    }}
                </div>

                <PaginationControls
                    items_per_page=state.items_per_page
                    current_page=state.current_page
                    total_pages=state.total_pages
                    total_items=state.total_items
                    on_page_size_change=on_page_size_change
                    on_previous=on_previous
                    on_next=on_next
                />
            </div>
        </div>
    }
}
