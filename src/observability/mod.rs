//! File-based logging for the plugin.
//!
//! A plugin has no terminal of its own to log to, so `tracing` output goes to a
//! plain-text file in the plugin's data directory.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → apkfetch.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/apkfetch/apkfetch.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! The level is the `trace_level` plugin option (any `EnvFilter` directive),
//! default `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::{init_tracing, LOG_FILE_NAME};
