//! Domain layer for the apkfetch plugin.
//!
//! Core types independent of Zellij-specific APIs: the app records returned by the
//! search service, the validated query, the theme preference and the error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`app_result`]: App records and display fallbacks
//! - [`query`]: Validated search query
//! - [`theme_preference`]: Light/dark preference

pub mod app_result;
pub mod error;
pub mod query;
pub mod theme_preference;

pub use app_result::{AppResult, ResultSet, NOT_AVAILABLE, UNKNOWN_APP};
pub use error::{ApkFetchError, Result};
pub use query::SearchQuery;
pub use theme_preference::ThemePreference;
