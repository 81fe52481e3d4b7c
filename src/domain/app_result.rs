//! App records returned by the search service.
//!
//! The service is treated as an opaque HTTP+JSON endpoint. Every field is
//! optional on the wire; display fallbacks are applied here so the renderer
//! never has to reason about missing data.

use serde::{Deserialize, Deserializer, Serialize};

/// Display name used when a record carries no usable name.
pub const UNKNOWN_APP: &str = "Unknown App";

/// Placeholder for a missing version or size.
pub const NOT_AVAILABLE: &str = "N/A";

/// One app record from a search response.
///
/// Values are kept exactly as received. Empty strings are treated like absent
/// values by the display accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,

    /// Human readable size as formatted by the service (e.g. `"24.5 MB"`).
    #[serde(default, deserialize_with = "lenient_string")]
    pub filesize: Option<String>,

    /// Icon URL.
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,

    /// Download URL. Required for a download to function.
    #[serde(default, deserialize_with = "lenient_string")]
    pub path: Option<String>,
}

impl AppResult {
    /// Returns the name to display, falling back to [`UNKNOWN_APP`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(UNKNOWN_APP)
    }

    #[must_use]
    pub fn display_version(&self) -> &str {
        non_empty(self.version.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    #[must_use]
    pub fn display_size(&self) -> &str {
        non_empty(self.filesize.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    /// Whether the record has an icon that could be shown.
    ///
    /// A terminal cannot draw the image itself; a missing or malformed URL is the
    /// equivalent of an image that failed to load and hides the icon slot.
    #[must_use]
    pub fn has_icon(&self) -> bool {
        non_empty(self.image.as_deref()).is_some_and(is_http_url)
    }

    /// Returns the raw name, `None` when absent or empty.
    #[must_use]
    pub fn raw_name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    #[must_use]
    pub fn download_path(&self) -> Option<&str> {
        non_empty(self.path.as_deref())
    }
}

/// Ordered list of records from a single search.
pub type ResultSet = Vec<AppResult>;

/// Returns `true` for absolute `http://` or `https://` URLs.
#[must_use]
pub fn is_http_url(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    (lower.starts_with("https://") && lower.len() > "https://".len())
        || (lower.starts_with("http://") && lower.len() > "http://".len())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts strings, numbers and booleans, rendering non-strings as text.
///
/// The service is loosely typed; a numeric `version` or `filesize` must not fail
/// the whole response.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back() {
        let result: AppResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.display_name(), UNKNOWN_APP);
        assert_eq!(result.display_version(), NOT_AVAILABLE);
        assert_eq!(result.display_size(), NOT_AVAILABLE);
        assert!(!result.has_icon());
        assert!(result.download_path().is_none());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let result: AppResult =
            serde_json::from_str(r#"{"name":"","version":"  ","path":""}"#).unwrap();
        assert_eq!(result.display_name(), UNKNOWN_APP);
        assert_eq!(result.display_version(), NOT_AVAILABLE);
        assert!(result.raw_name().is_none());
        assert!(result.download_path().is_none());
    }

    #[test]
    fn numeric_fields_are_rendered_as_text() {
        let result: AppResult =
            serde_json::from_str(r#"{"name":"Calc","version":3,"filesize":12.5}"#).unwrap();
        assert_eq!(result.display_version(), "3");
        assert_eq!(result.display_size(), "12.5");
    }

    #[test]
    fn icon_requires_http_url() {
        let with_icon = AppResult {
            image: Some("https://cdn.example.com/icon.png".to_string()),
            ..AppResult::default()
        };
        let broken = AppResult {
            image: Some("not a url".to_string()),
            ..AppResult::default()
        };
        assert!(with_icon.has_icon());
        assert!(!broken.has_icon());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let result: AppResult =
            serde_json::from_str(r#"{"name":"Maps","rating":4.5,"path":"https://x/y.apk"}"#)
                .unwrap();
        assert_eq!(result.display_name(), "Maps");
        assert_eq!(result.download_path(), Some("https://x/y.apk"));
    }
}
