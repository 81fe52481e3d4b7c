//! Search endpoint URL construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::SearchQuery;

/// Default search service.
pub const DEFAULT_ENDPOINT: &str = "https://apk-downloader.bjcoderx.workers.dev/";

/// Name of the query parameter carrying the search string.
const QUERY_PARAM: &str = "query";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the GET URL for `query` against `endpoint`.
///
/// Appends `?query=` or, when the endpoint already carries a query string,
/// `&query=`.
#[must_use]
pub fn search_url(endpoint: &str, query: &SearchQuery) -> String {
    let separator = if endpoint.contains('?') {
        if endpoint.ends_with('?') || endpoint.ends_with('&') {
            ""
        } else {
            "&"
        }
    } else {
        "?"
    };
    let encoded = utf8_percent_encode(query.as_str(), COMPONENT);
    format!("{endpoint}{separator}{QUERY_PARAM}={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(s: &str) -> SearchQuery {
        SearchQuery::parse(s).unwrap()
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            search_url(DEFAULT_ENDPOINT, &query("my app & co/2")),
            "https://apk-downloader.bjcoderx.workers.dev/?query=my%20app%20%26%20co%2F2"
        );
        assert_eq!(
            search_url("https://x/", &query("it's (fine)!*~_.-")),
            "https://x/?query=it's%20(fine)!*~_.-"
        );
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(search_url("https://x/", &query("café")), "https://x/?query=caf%C3%A9");
    }

    #[test]
    fn respects_existing_query_string() {
        assert_eq!(search_url("https://x/?v=2", &query("maps")), "https://x/?v=2&query=maps");
        assert_eq!(search_url("https://x/?", &query("maps")), "https://x/?query=maps");
    }
}
