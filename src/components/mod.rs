//! UI Components
//!
//! Presentational Leptos components for the Pokedex.

pub mod pagination;
pub mod pokemon_card;

pub use pagination::PaginationControls;
pub use pokemon_card::PokemonCard;
