//! API Client
//!
//! HTTP access to the Pokedex backend.

pub mod client;

pub use client::{capture_pokemon, fetch_pokemon, PokemonPage};
