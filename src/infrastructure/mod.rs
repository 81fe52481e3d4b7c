//! Infrastructure layer for filesystem and network interactions.
//!
//! Utilities for working with the Zellij plugin sandbox environment (where the
//! host filesystem is mounted under `/host`) and for building requests to the
//! search service.

pub mod endpoint;
pub mod paths;

pub use endpoint::{search_url, DEFAULT_ENDPOINT};
pub use paths::{expand_tilde, get_data_dir, preferences_file, strip_host_prefix};
