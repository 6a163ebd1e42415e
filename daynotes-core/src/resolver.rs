//! Year resolution for raw notes documents.
//!
//! A raw document may hold entries for several years (or junk keys). The
//! resolver picks which single year is active and reduces the document to
//! that year's notes. Pure function, never errors: malformed input degrades
//! to an empty map for the caller's preferred year.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::notes::{key_year, year_prefix, NotesMap};

/// Outcome of resolving a raw notes document against a preferred year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub active_year: i32,
    pub notes: NotesMap,
}

impl Resolution {
    fn empty(year: i32) -> Self {
        Resolution {
            active_year: year,
            notes: NotesMap::new(),
        }
    }
}

/// Resolve the active year and its notes from a raw JSON document.
///
/// The preferred year wins when the document contains entries for it (or
/// contains no dated entries at all); otherwise the most recent year found
/// in the document wins.
pub fn resolve(raw: Option<&Value>, preferred_year: i32) -> Resolution {
    // Missing, non-object, or array input is absorbed, not propagated.
    let Some(Value::Object(map)) = raw else {
        return Resolution::empty(preferred_year);
    };

    // Year detection considers strictly-patterned keys only.
    let years: BTreeSet<i32> = map.keys().filter_map(|k| key_year(k)).collect();

    let active_year = if years.is_empty() || years.contains(&preferred_year) {
        preferred_year
    } else {
        years.iter().next_back().copied().unwrap_or(preferred_year)
    };

    // The filter is looser than the detection gate: any key starting with
    // "{year}-" survives, strictly patterned or not. Non-string values are
    // dropped since note text is always a string.
    let prefix = year_prefix(active_year);
    let notes = map
        .iter()
        .filter(|(k, _)| k.starts_with(&prefix))
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect();

    Resolution { active_year, notes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_is_idempotent() {
        let doc = json!({"2025-09-01": "a", "2026-09-01": "b"});
        let first = resolve(Some(&doc), 2025);
        let second = resolve(Some(&doc), 2025);
        assert_eq!(first, second);
    }

    #[test]
    fn test_preferred_year_wins_when_present() {
        let doc = json!({"2025-09-01": "a", "2026-09-01": "b"});
        let res = resolve(Some(&doc), 2025);
        assert_eq!(res.active_year, 2025);
        assert_eq!(res.notes.len(), 1);
        assert_eq!(res.notes["2025-09-01"], "a");
    }

    #[test]
    fn test_falls_back_to_max_year_when_preference_absent() {
        let doc = json!({"2025-09-01": "a", "2026-09-01": "b"});
        let res = resolve(Some(&doc), 2099);
        assert_eq!(res.active_year, 2026);
        assert_eq!(res.notes.len(), 1);
        assert_eq!(res.notes["2026-09-01"], "b");
    }

    #[test]
    fn test_single_foreign_year_wins_over_preference() {
        let doc = json!({"2024-01-15": "x", "2024-02-20": "y"});
        let res = resolve(Some(&doc), 2025);
        assert_eq!(res.active_year, 2024);
        assert_eq!(res.notes.len(), 2);
    }

    #[test]
    fn test_no_qualifying_keys_keeps_preferred_year() {
        let doc = json!({"hello": "world", "2025/09/01": "slashes"});
        let res = resolve(Some(&doc), 2030);
        assert_eq!(res.active_year, 2030);
        assert!(res.notes.is_empty());
    }

    #[test]
    fn test_array_input_degrades_to_empty() {
        let doc = json!(["not", "an", "object"]);
        let res = resolve(Some(&doc), 2025);
        assert_eq!(res.active_year, 2025);
        assert!(res.notes.is_empty());
    }

    #[test]
    fn test_missing_and_scalar_input_degrade_to_empty() {
        assert_eq!(resolve(None, 2025), Resolution::empty(2025));
        assert_eq!(resolve(Some(&json!(null)), 2025), Resolution::empty(2025));
        assert_eq!(resolve(Some(&json!(42)), 2025), Resolution::empty(2025));
    }

    #[test]
    fn test_prefix_filter_is_looser_than_year_detection() {
        // "2025-birthday" never counts toward year detection, but once 2025
        // is active it survives the prefix filter.
        let doc = json!({"2025-09-01": "a", "2025-birthday": "cake"});
        let res = resolve(Some(&doc), 2025);
        assert_eq!(res.active_year, 2025);
        assert_eq!(res.notes.len(), 2);
        assert_eq!(res.notes["2025-birthday"], "cake");
    }

    #[test]
    fn test_malformed_keys_alone_do_not_select_a_year() {
        let doc = json!({"2031-birthday": "cake"});
        let res = resolve(Some(&doc), 2025);
        assert_eq!(res.active_year, 2025);
        assert!(res.notes.is_empty());
    }

    #[test]
    fn test_non_string_values_are_dropped() {
        let doc = json!({"2025-09-01": "a", "2025-09-02": 7, "2025-09-03": null});
        let res = resolve(Some(&doc), 2025);
        assert_eq!(res.notes.len(), 1);
    }
}
