//! Query-string parsing and matching against query-directory pairs.

use crate::types::route::QueryParam;
use std::collections::HashMap;

/// Parse a query string into a map, percent-decoding names and values.
///
/// Repeated names are joined with `,`. A name without `=` maps to an empty
/// value.
pub fn parse_query_string(query_str: &str) -> HashMap<String, String> {
    let mut result: HashMap<String, String> = HashMap::new();

    for pair in query_str.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(key);
        let value = decode(value);

        result
            .entry(key)
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    result
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .unwrap_or(raw)
}

/// True when every expected pair is present in `actual`.
///
/// Extra request parameters are ignored. For a repeated request parameter
/// any one of its values may satisfy the pair.
pub fn query_matches(expected: &[QueryParam], actual: &HashMap<String, String>) -> bool {
    expected.iter().all(|param| {
        actual.get(&param.name).is_some_and(|value| {
            value == &param.value || value.split(',').any(|v| v.trim() == param.value)
        })
    })
}
