//! Query-string parsing and formatting
//!
//! Backs `InMemoryUrlState::from_query` and frontends that build shareable
//! links from the current parameter map.

use std::fmt::Write as _;

use crate::traits::UrlParams;

/// Parse a query string into a parameter map.
///
/// Tolerates a leading `?`, skips empty keys, percent-decodes keys and
/// values, and keeps the last occurrence of a repeated key. Values with
/// invalid percent escapes are kept verbatim.
#[must_use]
pub fn parse_query(query: &str) -> UrlParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = UrlParams::new();

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = match urlencoding::decode(key) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => key.to_string(),
        };
        if key.is_empty() {
            continue;
        }
        let value = match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value.to_string(),
        };
        params.insert(key, value);
    }

    params
}

/// Format a parameter map as a query string (no leading `?`).
///
/// Keys are sorted for deterministic output; an empty map formats as the
/// empty string.
#[must_use]
pub fn format_query(params: &UrlParams) -> String {
    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort();

    let mut query = String::new();
    for key in keys {
        if !query.is_empty() {
            query.push('&');
        }
        let _ = write!(
            query,
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&params[key])
        );
    }
    query
}
