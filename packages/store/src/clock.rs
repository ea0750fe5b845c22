//! Wall-clock helpers for record ids and timestamps.
//!
//! Ids are the creation instant in Unix milliseconds, as decimal text. A clock
//! that steps backwards can hand out an id smaller than an older record's;
//! ordering is kept by collection position, never by id or timestamp.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// ISO 8601 UTC with millisecond precision: `2026-10-19T08:15:30.120Z`.
pub fn iso_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Timestamp-derived id not present in `existing`.
///
/// Starts from `millis` and steps forward one millisecond at a time until the
/// id is free, so rapid calls within the same millisecond stay distinct.
pub fn unique_id<'a>(millis: i64, existing: impl IntoIterator<Item = &'a str>) -> String {
    let taken: std::collections::HashSet<&str> = existing.into_iter().collect();
    let mut candidate = millis;
    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamp_format() {
        assert_eq!(iso_timestamp(0), "1970-01-01T00:00:00.000Z");
        assert_eq!(iso_timestamp(1_700_000_000_123), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_unique_id_skips_taken() {
        assert_eq!(unique_id(100, []), "100");
        assert_eq!(unique_id(100, ["100", "101", "5"]), "102");
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
