//! Search response classification and user-facing messages.

use crate::domain::error::{ApkFetchError, Result};
use crate::domain::{AppResult, ResultSet};
use serde_json::Value;

/// Shown when the query is blank. No request is issued.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter an app name to search.";

/// Shown when the service answered with an empty list.
pub const NO_RESULTS_MESSAGE: &str = "No apps found for your search. Please try another name.";

/// Shown for any transport, status or decode failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch app data. Please check your connection.";

/// Shown when the host refused web access.
pub const WEB_ACCESS_DENIED_MESSAGE: &str =
    "Web access was not granted. Reopen the plugin to allow searching.";

/// Shown when the startup permission request was refused.
pub const PERMISSIONS_DENIED_MESSAGE: &str =
    "Permissions were not granted. Reopen the plugin to allow searching and downloads.";

/// Label of the search control when idle.
pub const SEARCH_LABEL: &str = "Search APK";

/// Label of the search control while a request is in flight.
pub const SEARCHING_LABEL: &str = "Searching...";

/// Number of placeholder items shown while loading.
pub const SKELETON_COUNT: usize = 3;

/// What a completed search produced.
#[derive(Debug)]
pub enum SearchOutcome {
    /// At least one record.
    Found(ResultSet),
    /// A valid JSON response that is not a non-empty list.
    Empty,
    /// A non-2xx status, a body that is not JSON, or a list that is not records.
    Failed(ApkFetchError),
}

impl SearchOutcome {
    /// Classifies a raw HTTP response.
    ///
    /// Only a non-empty JSON list yields records. Any other JSON value (`null`,
    /// `[]`, objects such as `{"error": ..}`, numbers, strings) means nothing was
    /// found. Bodies that are not JSON at all are failures.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match decode_results(status, body) {
            Ok(results) if results.is_empty() => Self::Empty,
            Ok(results) => Self::Found(results),
            Err(e) => Self::Failed(e),
        }
    }
}

fn decode_results(status: u16, body: &[u8]) -> Result<ResultSet> {
    if !(200..300).contains(&status) {
        return Err(ApkFetchError::Http { status });
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) if !items.is_empty() => {
            let results: Vec<AppResult> = serde_json::from_value(Value::Array(items))?;
            Ok(results)
        }
        other => {
            tracing::debug!(kind = json_kind(&other), "response carries no records");
            Ok(Vec::new())
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_list_is_found() {
        let body = br#"[{"name":"A","path":"https://x/a.apk"},{"name":"B"}]"#;
        match SearchOutcome::from_response(200, body) {
            SearchOutcome::Found(results) => {
                assert_eq!(results.len(), 2);
                assert_eq!(results[0].display_name(), "A");
                assert_eq!(results[1].display_name(), "B");
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn empty_list_and_null_are_empty() {
        assert!(matches!(SearchOutcome::from_response(200, b"[]"), SearchOutcome::Empty));
        assert!(matches!(SearchOutcome::from_response(204, b"null"), SearchOutcome::Empty));
    }

    #[test]
    fn non_list_json_is_empty() {
        for body in [&br#"{"error":"not found"}"#[..], b"{}", b"0", b"\"\"", b"true"] {
            assert!(
                matches!(SearchOutcome::from_response(200, body), SearchOutcome::Empty),
                "{:?} should count as no results",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn non_success_status_fails() {
        let outcome = SearchOutcome::from_response(503, b"[]");
        assert!(matches!(
            outcome,
            SearchOutcome::Failed(ApkFetchError::Http { status: 503 })
        ));
    }

    #[test]
    fn undecodable_body_fails() {
        for body in [&b"<html>"[..], b"", b"[1, 2]", b"[{\"name\":"] {
            assert!(
                matches!(
                    SearchOutcome::from_response(200, body),
                    SearchOutcome::Failed(ApkFetchError::Decode(_))
                ),
                "{:?} should fail to decode",
                String::from_utf8_lossy(body)
            );
        }
    }
}
