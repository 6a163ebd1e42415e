//! Session state: the active year, its in-memory notes, and the store.
//!
//! All note edits flow through here. Each edit re-reads the whole persisted
//! map, mutates the single key, and writes the whole map back, so the last
//! writer wins at edit granularity.

use serde_json::Value;

use crate::error::{NotesError, NotesResult};
use crate::notes::{year_prefix, NotesMap};
use crate::store::NotesStore;

pub struct Session<S: NotesStore> {
    year: i32,
    notes: NotesMap,
    store: S,
}

impl<S: NotesStore> Session<S> {
    /// Open a session for a year, loading its persisted notes.
    pub fn open(year: i32, store: S) -> Self {
        let notes = store.load(year);
        Session { year, notes, store }
    }

    /// Open a session with an already-resolved notes map (e.g. from the
    /// remote document), ignoring the persisted store for display.
    pub fn with_notes(year: i32, notes: NotesMap, store: S) -> Self {
        Session { year, notes, store }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn notes(&self) -> &NotesMap {
        &self.notes
    }

    /// Apply one edit to a day's note.
    ///
    /// Trimming decides set-vs-delete only; a kept note stores the text as
    /// typed. Whitespace-only text removes the key: entries are never stored
    /// as empty strings.
    pub fn apply_edit(&mut self, key: &str, text: &str) {
        let mut persisted = self.store.load(self.year);

        if text.trim().is_empty() {
            persisted.remove(key);
            self.notes.remove(key);
        } else {
            persisted.insert(key.to_string(), text.to_string());
            self.notes.insert(key.to_string(), text.to_string());
        }

        self.store.save(self.year, &persisted);
    }

    /// Replace this year's notes with the entries of an imported document.
    ///
    /// Applies the prefix-only year filter against the current active year
    /// (full resolution is not re-run). A document that is not a JSON object
    /// is rejected and the store is left unchanged.
    pub fn import(&mut self, raw: &Value) -> NotesResult<usize> {
        let Value::Object(map) = raw else {
            return Err(NotesError::MalformedDocument(
                "expected a JSON object mapping date keys to note text".to_string(),
            ));
        };

        let prefix = year_prefix(self.year);
        let filtered: NotesMap = map
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect();

        self.store.save(self.year, &filtered);
        self.notes = filtered;
        Ok(self.notes.len())
    }

    /// Pretty-printed JSON of the persisted map (not the in-memory one).
    pub fn export_json(&self) -> NotesResult<String> {
        let persisted = self.store.load(self.year);
        serde_json::to_string_pretty(&persisted)
            .map_err(|e| NotesError::Serialization(e.to_string()))
    }
}
