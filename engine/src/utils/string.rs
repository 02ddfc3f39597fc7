//! String utility functions

use std::sync::OnceLock;

use serde_json::Value;

/// Truncate text to max length with ellipsis
///
/// Returns the input unchanged when it fits within `max_len` characters.
pub fn truncate_description(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_len).collect::<String>())
    }
}

/// Split a comma-separated list into trimmed, non-empty entries.
///
/// Order is preserved and no case normalization is applied.
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize a heterogeneous `companies` field into a list of names.
///
/// The upstream API is inconsistent: the field may arrive as a proper JSON
/// array, or as a Python-repr-like string such as `"['Met', '##F']"`. This is
/// a best-effort decoder with graceful degradation:
///
/// 1. Arrays are returned as-is (string elements only).
/// 2. Strings get single quotes coerced to double quotes and are parsed as a
///    JSON array.
/// 3. On failure, every `'...'`-quoted substring is extracted instead.
/// 4. Anything else decodes as the empty list. Never errors.
pub fn parse_companies(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Value::String(s) => parse_companies_str(s),
        _ => Vec::new(),
    }
}

fn parse_companies_str(s: &str) -> Vec<String> {
    let coerced = s.replace('\'', "\"");
    if let Ok(items) = serde_json::from_str::<Vec<String>>(&coerced) {
        return items;
    }

    static QUOTED: OnceLock<regex::Regex> = OnceLock::new();
    let quoted = QUOTED.get_or_init(|| regex::Regex::new(r"'([^']+)'").expect("Invalid regex"));
    quoted
        .captures_iter(s)
        .map(|c| c[1].to_string())
        .collect()
}
