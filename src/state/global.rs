//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::PokemonPage;
use crate::state::prefs::ViewPrefs;

/// One Pokedex entry as served by the API.
///
/// Everything here is immutable from the client's point of view except
/// `is_captured`, which only ever goes false -> true.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Pokemon {
    pub number: u32,
    pub name: String,
    pub type_one: String,
    #[serde(default)]
    pub type_two: Option<String>,
    pub total: u32,
    pub hit_points: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
    pub generation: u32,
    pub legendary: bool,
    pub is_captured: bool,
}

/// Sort direction for the list query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Ascending),
            "desc" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

/// UI color theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Type filter options offered in the UI. A static allow-list, not derived
/// from data; entries with other types still render, they just can't be
/// selected as a filter.
pub const TYPE_FILTERS: [&str; 9] = [
    "all", "Grass", "Poison", "Fire", "Water", "Bug", "Flying", "Normal", "Electric",
];

/// Clamped next-page target: never past the last page.
pub fn next_page(current: u32, total_pages: u32) -> u32 {
    current.saturating_add(1).min(total_pages.max(1))
}

/// Clamped previous-page target: never below page 1.
pub fn previous_page(current: u32) -> u32 {
    current.saturating_sub(1).max(1)
}

/// Monotonic stamp for outbound list requests. Responses are applied
/// only while their stamp is still the newest one issued, so a slow
/// earlier request resolving late cannot overwrite fresher state.
#[derive(Clone, Copy)]
pub struct FetchGeneration(StoredValue<u64>);

impl FetchGeneration {
    pub fn new() -> Self {
        Self(store_value(0))
    }

    /// Issue the stamp for the next request.
    pub fn next(&self) -> u64 {
        let generation = self.0.with_value(|g| g + 1);
        self.0.set_value(generation);
        generation
    }

    /// Whether a response carrying this stamp may still be applied.
    pub fn is_latest(&self, generation: u64) -> bool {
        self.0.get_value() == generation
    }
}

impl Default for FetchGeneration {
    fn default() -> Self {
        Self::new()
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Entries for the current page
    pub pokemon: RwSignal<Vec<Pokemon>>,
    /// Current page, 1-based, clamped to [1, total_pages]
    pub current_page: RwSignal<u32>,
    /// Total pages reported by the server
    pub total_pages: RwSignal<u32>,
    /// Total matching entries reported by the server
    pub total_items: RwSignal<u32>,
    /// Page size preference
    pub items_per_page: RwSignal<u32>,
    /// Sort direction preference (sorting is always by number)
    pub sort_order: RwSignal<SortOrder>,
    /// Type filter preference ("all" or one of TYPE_FILTERS)
    pub selected_type: RwSignal<String>,
    /// Color theme preference
    pub theme: RwSignal<Theme>,
}

/// Provide global state to the component tree, hydrated from persisted
/// preferences.
pub fn provide_global_state() {
    let state = GlobalState::from_prefs(ViewPrefs::load());
    provide_context(state);
}

impl GlobalState {
    pub fn from_prefs(prefs: ViewPrefs) -> Self {
        Self {
            pokemon: create_rw_signal(Vec::new()),
            current_page: create_rw_signal(prefs.current_page),
            total_pages: create_rw_signal(1),
            total_items: create_rw_signal(0),
            items_per_page: create_rw_signal(prefs.items_per_page),
            sort_order: create_rw_signal(prefs.sort_order),
            selected_type: create_rw_signal(prefs.selected_type),
            theme: create_rw_signal(prefs.theme),
        }
    }

    /// Replace the page result with the server's answer. The server is
    /// authoritative, including over the page number it actually served.
    /// The echoed page is only written when it differs so an unchanged
    /// echo does not re-trigger the fetch effect.
    pub fn apply_page(&self, page: PokemonPage) {
        self.pokemon.set(page.pokemon);
        self.total_items.set(page.total_items);
        self.total_pages.set(page.total_pages);
        if self.current_page.get_untracked() != page.current_page {
            self.current_page.set(page.current_page);
        }
    }

    pub fn go_to_next_page(&self) {
        let target = next_page(
            self.current_page.get_untracked(),
            self.total_pages.get_untracked(),
        );
        if target != self.current_page.get_untracked() {
            self.current_page.set(target);
        }
    }

    pub fn go_to_previous_page(&self) {
        let target = previous_page(self.current_page.get_untracked());
        if target != self.current_page.get_untracked() {
            self.current_page.set(target);
        }
    }

    /// The result set changes shape, so the old page index is meaningless.
    fn reset_to_first_page(&self) {
        if self.current_page.get_untracked() != 1 {
            self.current_page.set(1);
        }
    }

    /// Persistence of the preference keys happens in the app-level
    /// handlers; these only touch reactive state.
    pub fn set_items_per_page(&self, size: u32) {
        self.items_per_page.set(size);
        self.reset_to_first_page();
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        self.sort_order.set(order);
        self.reset_to_first_page();
    }

    pub fn set_selected_type(&self, ty: String) {
        self.selected_type.set(ty);
        self.reset_to_first_page();
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page(current_page: u32, total_items: u32, total_pages: u32) -> PokemonPage {
        PokemonPage {
            pokemon: Vec::new(),
            current_page,
            total_items,
            total_pages,
        }
    }

    #[test]
    fn test_next_page_clamps_to_last() {
        assert_eq!(next_page(1, 3), 2);
        assert_eq!(next_page(3, 3), 3);
        assert_eq!(next_page(5, 3), 3);
    }

    #[test]
    fn test_next_page_with_no_pages() {
        // total_pages is never reported below 1, but stay in range anyway
        assert_eq!(next_page(1, 0), 1);
    }

    #[test]
    fn test_previous_page_clamps_to_first() {
        assert_eq!(previous_page(3), 2);
        assert_eq!(previous_page(1), 1);
        assert_eq!(previous_page(0), 1);
    }

    #[test]
    fn test_sort_order_round_trip() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Descending));
        assert_eq!(SortOrder::parse("ASC"), None);
        assert_eq!(SortOrder::Descending.as_str(), "desc");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_preference_change_resets_page() {
        let runtime = create_runtime();

        let state = GlobalState::from_prefs(ViewPrefs {
            items_per_page: 10,
            current_page: 4,
            sort_order: SortOrder::Ascending,
            selected_type: "all".to_string(),
            theme: Theme::Light,
        });
        state.total_pages.set(5);

        state.set_items_per_page(20);
        assert_eq!(state.current_page.get_untracked(), 1);

        state.current_page.set(3);
        state.set_sort_order(SortOrder::Descending);
        assert_eq!(state.current_page.get_untracked(), 1);

        state.current_page.set(2);
        state.set_selected_type("Fire".to_string());
        assert_eq!(state.current_page.get_untracked(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_navigation_clamps() {
        let runtime = create_runtime();

        let state = GlobalState::from_prefs(ViewPrefs {
            items_per_page: 10,
            current_page: 1,
            sort_order: SortOrder::Ascending,
            selected_type: "all".to_string(),
            theme: Theme::Light,
        });
        state.total_pages.set(2);

        state.go_to_previous_page();
        assert_eq!(state.current_page.get_untracked(), 1);

        state.go_to_next_page();
        assert_eq!(state.current_page.get_untracked(), 2);

        state.go_to_next_page();
        assert_eq!(state.current_page.get_untracked(), 2);

        runtime.dispose();
    }

    #[test]
    fn test_stale_fetch_response_is_discarded() {
        let runtime = create_runtime();

        let state = GlobalState::from_prefs(ViewPrefs {
            items_per_page: 10,
            current_page: 1,
            sort_order: SortOrder::Ascending,
            selected_type: "all".to_string(),
            theme: Theme::Light,
        });
        let generations = FetchGeneration::new();

        let first = generations.next();
        let second = generations.next();

        // The newer request's response lands first and is applied
        assert!(generations.is_latest(second));
        state.apply_page(sample_page(1, 18, 2));

        // The slow first request resolves last; its stamp is stale, so
        // its response must not be applied
        assert!(!generations.is_latest(first));
        if generations.is_latest(first) {
            state.apply_page(sample_page(3, 40, 4));
        }
        assert_eq!(state.current_page.get_untracked(), 1);
        assert_eq!(state.total_items.get_untracked(), 18);
        assert_eq!(state.total_pages.get_untracked(), 2);

        // A third request supersedes both
        let third = generations.next();
        assert!(!generations.is_latest(second));
        assert!(generations.is_latest(third));

        runtime.dispose();
    }

    #[test]
    fn test_apply_page_is_authoritative() {
        let runtime = create_runtime();

        let state = GlobalState::from_prefs(ViewPrefs {
            items_per_page: 10,
            current_page: 9,
            sort_order: SortOrder::Ascending,
            selected_type: "all".to_string(),
            theme: Theme::Light,
        });

        // Server corrected the requested page down to 2
        state.apply_page(sample_page(2, 18, 2));
        assert_eq!(state.current_page.get_untracked(), 2);
        assert_eq!(state.total_items.get_untracked(), 18);
        assert_eq!(state.total_pages.get_untracked(), 2);

        runtime.dispose();
    }
}
