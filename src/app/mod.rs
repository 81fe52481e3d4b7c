//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/storage layers. It implements the
//! event-driven architecture that powers the search widget.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Host Callbacks ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`appearance`]: Light/dark preference and the active palette
//! - [`download`]: Safe file names and download requests
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Body panel and input focus state types
//! - [`search`]: Response classification and user-facing messages
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod appearance;
pub mod download;
pub mod handler;
pub mod modes;
pub mod search;
pub mod state;

#[cfg(test)]
mod tests;

pub use actions::Action;
pub use appearance::Appearance;
pub use handler::{handle_event, Event};
pub use modes::{InputFocus, StatusKind, StatusMessage, UiState};
pub use state::{AppState, SearchSettings};

/// Seconds a success banner stays visible.
pub const STATUS_DISMISS_SECONDS: f64 = 4.0;
