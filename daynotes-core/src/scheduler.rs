//! Debounced edit scheduling.
//!
//! Rapid edits to the same day are coalesced: each new edit restarts that
//! key's quiescence timer and supersedes the pending text, so only the text
//! standing when the window closes gets committed. The table is plain data
//! over `Instant`s; an async driver decides when to call `take_due`.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default quiescence window before a pending edit is committed.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(400);

struct PendingEdit {
    text: String,
    deadline: Instant,
}

pub struct EditScheduler {
    window: Duration,
    pending: HashMap<String, PendingEdit>,
}

impl EditScheduler {
    pub fn new(window: Duration) -> Self {
        EditScheduler {
            window,
            pending: HashMap::new(),
        }
    }

    /// Record an edit, restarting the key's quiescence timer. Any pending
    /// text for the same key is superseded, not separately persisted.
    pub fn record(&mut self, key: &str, text: &str, now: Instant) {
        self.pending.insert(
            key.to_string(),
            PendingEdit {
                text: text.to_string(),
                deadline: now + self.window,
            },
        );
    }

    /// Remove and return edits whose quiescence window has closed.
    pub fn take_due(&mut self, now: Instant) -> Vec<(String, String)> {
        let due_keys: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(k, _)| k.clone())
            .collect();

        let mut due = Vec::with_capacity(due_keys.len());
        for key in due_keys {
            if let Some(edit) = self.pending.remove(&key) {
                due.push((key, edit.text));
            }
        }
        due.sort();
        due
    }

    /// Drain every pending edit regardless of deadline (shutdown/EOF).
    pub fn flush(&mut self) -> Vec<(String, String)> {
        let mut all: Vec<(String, String)> = self
            .pending
            .drain()
            .map(|(k, p)| (k, p.text))
            .collect();
        all.sort();
        all
    }

    /// Earliest pending deadline, for the driver's sleep.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for EditScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(400);

    #[test]
    fn test_edit_is_due_after_window() {
        let mut sched = EditScheduler::new(WINDOW);
        let start = Instant::now();

        sched.record("2025-09-01", "a", start);
        assert!(sched.take_due(start).is_empty());
        assert_eq!(
            sched.take_due(start + WINDOW),
            vec![("2025-09-01".to_string(), "a".to_string())]
        );
        assert!(sched.is_empty());
    }

    #[test]
    fn test_new_edit_restarts_window_and_supersedes_text() {
        let mut sched = EditScheduler::new(WINDOW);
        let start = Instant::now();

        sched.record("2025-09-01", "a", start);
        sched.record("2025-09-01", "ab", start + Duration::from_millis(200));

        // First deadline passed, but the timer was restarted.
        assert!(sched.take_due(start + WINDOW).is_empty());

        let due = sched.take_due(start + Duration::from_millis(200) + WINDOW);
        assert_eq!(due, vec![("2025-09-01".to_string(), "ab".to_string())]);
    }

    #[test]
    fn test_keys_are_coalesced_independently() {
        let mut sched = EditScheduler::new(WINDOW);
        let start = Instant::now();

        sched.record("2025-09-01", "a", start);
        sched.record("2025-09-02", "b", start + Duration::from_millis(300));

        let due = sched.take_due(start + WINDOW);
        assert_eq!(due, vec![("2025-09-01".to_string(), "a".to_string())]);

        let due = sched.take_due(start + Duration::from_millis(300) + WINDOW);
        assert_eq!(due, vec![("2025-09-02".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_flush_drains_everything() {
        let mut sched = EditScheduler::new(WINDOW);
        let start = Instant::now();

        sched.record("2025-09-01", "a", start);
        sched.record("2025-09-02", "b", start);

        let flushed = sched.flush();
        assert_eq!(flushed.len(), 2);
        assert!(sched.is_empty());
        assert_eq!(sched.next_deadline(), None);
    }

    #[test]
    fn test_next_deadline_is_earliest() {
        let mut sched = EditScheduler::new(WINDOW);
        let start = Instant::now();

        sched.record("2025-09-02", "b", start + Duration::from_millis(100));
        sched.record("2025-09-01", "a", start);

        assert_eq!(sched.next_deadline(), Some(start + WINDOW));
    }
}
