//! Persisted View Preferences
//!
//! Thin wrapper over `window.localStorage` plus the typed hydration of
//! the view preferences at startup. Storage access is best-effort: a
//! missing window or a storage failure reads as absent and writes are
//! silently dropped.

use crate::state::global::{SortOrder, Theme};

pub const THEME_KEY: &str = "theme";
pub const CURRENT_PAGE_KEY: &str = "currentPage";
pub const ITEMS_PER_PAGE_KEY: &str = "itemsPerPage";
pub const SORT_ORDER_KEY: &str = "sortOrder";
pub const SELECTED_TYPE_KEY: &str = "selectedType";

/// Fallback page size when nothing usable is stored.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Read a preference from local storage.
pub fn read(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Write a preference to local storage, best-effort.
pub fn write(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Typed snapshot of the persisted view preferences, hydrated once at
/// startup with explicit per-field defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewPrefs {
    pub items_per_page: u32,
    pub current_page: u32,
    pub sort_order: SortOrder,
    pub selected_type: String,
    pub theme: Theme,
}

impl ViewPrefs {
    /// Load preferences from local storage, falling back to the system
    /// color scheme for the theme.
    pub fn load() -> Self {
        Self::resolve(
            read(ITEMS_PER_PAGE_KEY),
            read(CURRENT_PAGE_KEY),
            read(SORT_ORDER_KEY),
            read(SELECTED_TYPE_KEY),
            read(THEME_KEY),
            system_prefers_dark(),
        )
    }

    /// Default-resolution rules, one per field:
    /// - items per page: stored positive integer, else 10
    /// - current page: stored positive integer, else 1
    /// - sort order: stored "asc"/"desc", else ascending
    /// - selected type: stored non-empty string, else "all"
    /// - theme: stored "light"/"dark", else the system color scheme
    pub fn resolve(
        items_per_page: Option<String>,
        current_page: Option<String>,
        sort_order: Option<String>,
        selected_type: Option<String>,
        theme: Option<String>,
        prefers_dark: bool,
    ) -> Self {
        Self {
            items_per_page: parse_positive(items_per_page).unwrap_or(DEFAULT_ITEMS_PER_PAGE),
            current_page: parse_positive(current_page).unwrap_or(1),
            sort_order: sort_order
                .and_then(|s| SortOrder::parse(&s))
                .unwrap_or(SortOrder::Ascending),
            selected_type: selected_type
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "all".to_string()),
            theme: theme.and_then(|s| Theme::parse(&s)).unwrap_or(if prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }),
        }
    }
}

fn parse_positive(value: Option<String>) -> Option<u32> {
    value.and_then(|s| s.parse::<u32>().ok()).filter(|&n| n > 0)
}

/// Probe the operating environment's color-scheme signal.
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}
