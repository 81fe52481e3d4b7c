//! Error types for the apkfetch plugin.
//!
//! This module defines the centralized error type [`ApkFetchError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. Errors never reach
//! the user verbatim: the event handler turns them into one of the fixed status
//! messages and logs the underlying cause.

use thiserror::Error;

/// The main error type for apkfetch operations.
#[derive(Debug, Error)]
pub enum ApkFetchError {
    /// Storage operation failed.
    ///
    /// Occurs when reading or writing the preference file fails, or when the
    /// file exists but does not contain a valid preference document.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The search endpoint answered with a status outside the 2xx range.
    ///
    /// The host also reports transport failures (DNS, TLS, refused connections)
    /// through this path, so it covers every "could not reach the service" case.
    #[error("Server responded with status: {status}")]
    Http {
        /// HTTP status code reported by the host.
        status: u16,
    },

    /// The response body was not a JSON list of app records.
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A download could not be started for the selected result.
    #[error("Download error: {0}")]
    Download(String),
}

/// A specialized `Result` type for apkfetch operations.
pub type Result<T> = std::result::Result<T, ApkFetchError>;
