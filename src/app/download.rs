//! Download initiation for a selected result.
//!
//! Downloads are fire-and-forget: once the host command is started the widget
//! reports success. Completion is not tracked.

use crate::domain::app_result::is_http_url;
use crate::domain::error::{ApkFetchError, Result};
use crate::domain::AppResult;

/// Suffix appended to every suggested file name.
pub const APK_EXTENSION: &str = ".apk";

/// Name used when a result has none.
const FALLBACK_FILE_STEM: &str = "app";

/// Shown when the download command cannot be started.
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to start the download.";

/// Shown when the host refused to run commands, so `curl` cannot be started.
pub const DOWNLOAD_DENIED_MESSAGE: &str =
    "Running commands was not granted. Reopen the plugin to allow downloads.";

/// Everything the shim needs to start a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub file_name: String,
    /// `download_dir` joined with `file_name`.
    pub destination: String,
    /// Name shown in the status message.
    pub display_name: String,
}

impl DownloadRequest {
    #[must_use]
    pub fn started_message(&self) -> String {
        format!("Download for {} has started.", self.display_name)
    }
}

/// Builds a filesystem-safe file name from an app name.
///
/// Every character outside `[A-Za-z0-9.-]` becomes `_` and `.apk` is appended.
/// Absent or empty names use `app`.
#[must_use]
pub fn safe_file_name(name: Option<&str>) -> String {
    let stem = name.filter(|n| !n.is_empty()).unwrap_or(FALLBACK_FILE_STEM);
    let mut file_name: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    file_name.push_str(APK_EXTENSION);
    file_name
}

/// Prepares the download of `result` into `download_dir`.
///
/// # Errors
///
/// Returns [`ApkFetchError::Download`] when the result has no path or the path is
/// not an `http(s)` URL.
pub fn prepare_download(result: &AppResult, download_dir: &str) -> Result<DownloadRequest> {
    let url = result
        .download_path()
        .map(str::trim)
        .ok_or_else(|| ApkFetchError::Download("result has no download path".to_string()))?;

    if !is_http_url(url) {
        return Err(ApkFetchError::Download(format!(
            "unsupported download location: {url}"
        )));
    }

    let file_name = safe_file_name(result.raw_name());
    let destination = join_destination(download_dir, &file_name);

    Ok(DownloadRequest {
        url: url.to_string(),
        file_name,
        destination,
        display_name: result.raw_name().unwrap_or(FALLBACK_FILE_STEM).to_string(),
    })
}

fn join_destination(download_dir: &str, file_name: &str) -> String {
    let dir = download_dir.trim();
    if dir.is_empty() || dir == "." {
        return file_name.to_string();
    }
    format!("{}/{file_name}", dir.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: Option<&str>, path: Option<&str>) -> AppResult {
        AppResult {
            name: name.map(String::from),
            path: path.map(String::from),
            ..AppResult::default()
        }
    }

    #[test]
    fn replaces_unsafe_characters() {
        assert_eq!(safe_file_name(Some("My App!")), "My_App_.apk");
        assert_eq!(safe_file_name(Some("v1.2-beta")), "v1.2-beta.apk");
        assert_eq!(safe_file_name(Some("a/b\\c:d")), "a_b_c_d.apk");
        assert_eq!(safe_file_name(Some("Café")), "Caf_.apk");
    }

    #[test]
    fn missing_name_uses_fallback() {
        assert_eq!(safe_file_name(None), "app.apk");
        assert_eq!(safe_file_name(Some("")), "app.apk");
    }

    #[test]
    fn prepares_request_with_message() {
        let request =
            prepare_download(&result(Some("My App!"), Some("https://x/y.apk")), "Downloads/")
                .unwrap();
        assert_eq!(request.url, "https://x/y.apk");
        assert_eq!(request.file_name, "My_App_.apk");
        assert_eq!(request.destination, "Downloads/My_App_.apk");
        assert!(request.started_message().contains("My App!"));
    }

    #[test]
    fn current_directory_destination_is_bare_file_name() {
        let request = prepare_download(&result(None, Some("https://x/y.apk")), ".").unwrap();
        assert_eq!(request.destination, "app.apk");
        assert_eq!(request.started_message(), "Download for app has started.");
    }

    #[test]
    fn unusable_paths_are_rejected() {
        for path in [None, Some(""), Some("-o /etc/passwd"), Some("ftp://x/y.apk")] {
            let err = prepare_download(&result(Some("A"), path), ".").unwrap_err();
            assert!(matches!(err, ApkFetchError::Download(_)), "{path:?}");
        }
    }
}
