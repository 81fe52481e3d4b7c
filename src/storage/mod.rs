//! Storage layer for persistent user preferences.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: On-disk record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::PreferenceStore;
pub use json::JsonStorage;
pub use models::PreferencesRecord;
