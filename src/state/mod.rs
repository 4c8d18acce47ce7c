//! State Management
//!
//! Global application state and persisted view preferences.

pub mod global;
pub mod prefs;
