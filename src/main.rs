//! Pokedex
//!
//! Browser-based Pokemon catalog built with Leptos (WASM).
//!
//! # Features
//!
//! - Paginated, filterable, sortable entry list
//! - One-way "capture" mutation per entry
//! - View preferences persisted across sessions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It is a thin client over a REST backend exposing the
//! list and capture endpoints.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
