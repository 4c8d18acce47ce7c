//! HTTP API Client
//!
//! Functions for communicating with the Pokedex REST API.

use gloo_net::http::Request;

use crate::state::global::{Pokemon, SortOrder};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("pokedex_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// One page of the list endpoint's answer. The server's page bookkeeping
/// is authoritative over whatever the client asked for.
#[derive(Debug, serde::Deserialize)]
pub struct PokemonPage {
    pub pokemon: Vec<Pokemon>,
    pub current_page: u32,
    pub total_items: u32,
    pub total_pages: u32,
}

/// Build the query string for the list endpoint. Sorting is always by
/// number; an empty type filter maps to the literal "all".
pub fn list_query(page: u32, page_size: u32, sort_order: SortOrder, selected_type: &str) -> String {
    let type_param = if selected_type.is_empty() {
        "all"
    } else {
        selected_type
    };
    format!(
        "page={}&page_size={}&sort_order={}&sort_by=number&type={}",
        page,
        page_size,
        sort_order.as_str(),
        urlencoding::encode(type_param)
    )
}

/// Fetch one page of Pokemon
pub async fn fetch_pokemon(
    page: u32,
    page_size: u32,
    sort_order: SortOrder,
    selected_type: &str,
) -> Result<PokemonPage, String> {
    let api_base = get_api_base();
    let url = format!(
        "{}/pokemon?{}",
        api_base,
        list_query(page, page_size, sort_order, selected_type)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Mark a Pokemon as captured, identified by name. The request carries
/// credentials; exactly HTTP 200 counts as success, every other status is
/// reported as a generic network error. The response body is unused.
pub async fn capture_pokemon(name: &str) -> Result<(), String> {
    let api_base = get_api_base();
    let url = format!("{}/capture/{}", api_base, urlencoding::encode(name));

    let response = Request::post(&url)
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| {
            let message = e.to_string();
            if message.is_empty() {
                "Network error while capturing.".to_string()
            } else {
                message
            }
        })?;

    capture_result(response.status())
}

/// Map a capture response status to the card-visible outcome. Exactly
/// 200 counts as success; every other status, other 2xx included, is a
/// generic network error.
fn capture_result(status: u16) -> Result<(), String> {
    if status == 200 {
        Ok(())
    } else {
        Err("Network error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_basic() {
        let q = list_query(2, 10, SortOrder::Ascending, "all");
        assert_eq!(q, "page=2&page_size=10&sort_order=asc&sort_by=number&type=all");
    }

    #[test]
    fn test_list_query_empty_type_maps_to_all() {
        let q = list_query(1, 5, SortOrder::Descending, "");
        assert_eq!(q, "page=1&page_size=5&sort_order=desc&sort_by=number&type=all");
    }

    #[test]
    fn test_list_query_encodes_type() {
        let q = list_query(1, 20, SortOrder::Ascending, "Fire Red");
        assert!(q.ends_with("type=Fire%20Red"));
    }

    #[test]
    fn test_capture_result_requires_exactly_200() {
        assert_eq!(capture_result(200), Ok(()));
        // other 2xx statuses are not success
        assert_eq!(capture_result(204), Err("Network error".to_string()));
        assert_eq!(capture_result(404), Err("Network error".to_string()));
        assert_eq!(capture_result(500), Err("Network error".to_string()));
    }

    #[test]
    fn test_page_response_deserializes() {
        let body = r#"{
            "pokemon": [{
                "number": 25,
                "name": "Pikachu",
                "type_one": "Electric",
                "type_two": null,
                "total": 320,
                "hit_points": 35,
                "attack": 55,
                "defense": 40,
                "special_attack": 50,
                "special_defense": 50,
                "speed": 90,
                "generation": 1,
                "legendary": false,
                "is_captured": false,
                "uuid": "ignored-extra-field"
            }],
            "current_page": 2,
            "total_items": 18,
            "total_pages": 2,
            "page_size": 10
        }"#;

        let page: PokemonPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_items, 18);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.pokemon.len(), 1);
        assert_eq!(page.pokemon[0].name, "Pikachu");
        assert_eq!(page.pokemon[0].type_two, None);
        assert!(!page.pokemon[0].is_captured);
    }

    #[test]
    fn test_pokemon_with_two_types_deserializes() {
        let body = r#"{
            "number": 1,
            "name": "Bulbasaur",
            "type_one": "Grass",
            "type_two": "Poison",
            "total": 318,
            "hit_points": 45,
            "attack": 49,
            "defense": 49,
            "special_attack": 65,
            "special_defense": 65,
            "speed": 45,
            "generation": 1,
            "legendary": false,
            "is_captured": true
        }"#;

        let p: Pokemon = serde_json::from_str(body).unwrap();
        assert_eq!(p.type_two.as_deref(), Some("Poison"));
        assert!(p.is_captured);
    }
}
