//! Pokemon Card Component
//!
//! Renders a single entry with its artwork, type badges, stats, and the
//! capture button.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::global::Pokemon;

/// Official artwork for an entry, keyed by its number.
fn artwork_url(number: u32) -> String {
    format!(
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{}.png",
        number
    )
}

/// Generated placeholder stamped with the entry's number, used once when
/// the artwork fails to load.
fn placeholder_url(number: u32) -> String {
    format!("https://placehold.co/80x80/e9eef6/6b7280?text={}", number)
}

/// A capture attempt is a no-op while one is in flight or after success.
fn can_capture(captured: bool, loading: bool) -> bool {
    !captured && !loading
}

/// Card for a single Pokemon
#[component]
pub fn PokemonCard(pokemon: Pokemon) -> impl IntoView {
    // Seeded from the server's flag, then owned locally: a one-way
    // optimistic override that only a full list re-fetch can revert.
    let (captured, set_captured) = create_signal(pokemon.is_captured);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let name = pokemon.name.clone();
    let on_capture = move |_| {
        if !can_capture(captured.get_untracked(), loading.get_untracked()) {
            return;
        }
        set_loading.set(true);
        set_error.set(None);

        let name = name.clone();
        spawn_local(async move {
            match api::capture_pokemon(&name).await {
                Ok(()) => set_captured.set(true),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // Swap in the placeholder at most once; if the placeholder itself
    // fails there is nothing further to fall back to.
    let fallback_applied = store_value(false);
    let number = pokemon.number;
    let on_image_error = move |ev: web_sys::ErrorEvent| {
        if fallback_applied.get_value() {
            return;
        }
        fallback_applied.set_value(true);
        if let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
        {
            img.set_src(&placeholder_url(number));
        }
    };

    view! {
        <div class="pokemon-card">
            <img
                src=artwork_url(pokemon.number)
                alt=pokemon.name.clone()
                on:error=on_image_error
            />
            <div class="pokemon-info">
                <div class="number">"# " {pokemon.number}</div>
                <div class="name">{pokemon.name.clone()}</div>

                <div class="pokemon-types">
                    <span class=format!("type {}", pokemon.type_one)>
                        {pokemon.type_one.clone()}
                    </span>
                    {pokemon.type_two.clone().map(|t| view! {
                        <span class=format!("type {}", t)>{t.clone()}</span>
                    })}
                </div>

                <div class="pokemon-attributes">
                    <div><strong>"Total: "</strong> {pokemon.total}</div>
                    <div><strong>"HP: "</strong> {pokemon.hit_points}</div>
                    <div><strong>"Attack: "</strong> {pokemon.attack}</div>
                    <div><strong>"Defense: "</strong> {pokemon.defense}</div>
                </div>

                <button
                    class="captured-button"
                    on:click=on_capture
                    disabled=move || !can_capture(captured.get(), loading.get())
                    aria-pressed=move || captured.get().to_string()
                    title=move || {
                        if captured.get() { "Already captured" } else { "Mark as captured" }
                    }
                >
                    {move || {
                        if captured.get() {
                            "Captured"
                        } else if loading.get() {
                            "Capturing..."
                        } else {
                            "Capture"
                        }
                    }}
                </button>

                {move || error.get().map(|e| view! {
                    <div class="error">{e}</div>
                })}
            </div>
        </div>
    }
}
