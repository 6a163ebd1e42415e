//! Date-keyed note mappings and date-key helpers.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Mapping from date key (`YYYY-MM-DD`) to note text.
///
/// BTreeMap so iteration and export are deterministic. Values are never
/// empty strings: clearing a note removes its key instead.
pub type NotesMap = BTreeMap<String, String>;

/// Strict date-key check: exactly `YYYY-MM-DD` (length 10, digits in the
/// date positions, literal dashes). This is the sole gate for year
/// detection; the per-year filter is deliberately looser (prefix-only).
pub fn is_date_key(key: &str) -> bool {
    let b = key.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

/// Year component of a strictly-patterned date key.
pub fn key_year(key: &str) -> Option<i32> {
    if !is_date_key(key) {
        return None;
    }
    key[..4].parse().ok()
}

/// Canonical date key for a calendar day.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The filter prefix for a year's entries, e.g. `"2025-"`.
pub fn year_prefix(year: i32) -> String {
    format!("{}-", year)
}

/// Parse a user-supplied date key, rejecting anything but `YYYY-MM-DD`.
pub fn parse_date_key(s: &str) -> Result<NaiveDate, String> {
    if !is_date_key(s) {
        return Err(format!("Invalid date key '{}'. Expected YYYY-MM-DD", s));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}
