//! Path manipulation utilities for Zellij sandbox environment.
//!
//! The plugin runs inside Zellij's WASI sandbox, where the host filesystem is
//! mounted under `/host`. Files the plugin reads itself (preferences, theme files,
//! logs) use sandbox paths; commands started on the host (downloads) need host
//! paths.

use std::path::PathBuf;

/// Returns the data directory for apkfetch state.
///
/// Resolves to `/host/.local/share/zellij/apkfetch` in the sandbox. `/host` points
/// to the cwd of the last focused terminal, or the folder where Zellij was started,
/// which is typically the user's home directory. The preference file and the log
/// file live here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("apkfetch")
}

/// Returns the preference file location inside [`get_data_dir`].
#[must_use]
pub fn preferences_file() -> PathBuf {
    get_data_dir().join("preferences.json")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// `~/themes/dark.toml` becomes `/host/themes/dark.toml`; other paths are returned
/// unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix so a sandbox path can be handed to a host command.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => ".".to_string(),
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/').to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_mount() {
        assert_eq!(expand_tilde("~/themes/a.toml"), "/host/themes/a.toml");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
    }

    #[test]
    fn host_prefix_becomes_relative_to_host_cwd() {
        assert_eq!(strip_host_prefix("/host/Downloads"), "Downloads");
        assert_eq!(strip_host_prefix("/host"), ".");
        assert_eq!(strip_host_prefix("/hostile"), "/hostile");
        assert_eq!(strip_host_prefix("Downloads"), "Downloads");
    }

    #[test]
    fn preference_file_lives_in_data_dir() {
        assert!(preferences_file().starts_with(get_data_dir()));
    }
}
