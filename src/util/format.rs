//! Display formatting helpers for list and form views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

/// `snake_case` field key to a title: `first_name` -> `First Name`.
pub fn humanize(key: &str) -> String {
    key.split('_')
        .map(|frag| {
            let mut chars = frag.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Milliseconds since the epoch to whole seconds, flooring negatives.
pub fn to_unix_timestamp(millis: i64) -> i64 {
    millis.div_euclid(1000)
}

/// Render a millisecond timestamp as `YYYY-MM-DD` (UTC).
///
/// Blank, `null` or unparsable input renders as an empty string.
pub fn to_date_string(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return String::new();
    }
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}
