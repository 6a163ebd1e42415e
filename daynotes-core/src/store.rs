//! Persisted note storage.
//!
//! Storage failures never reach the caller: a failed load degrades to an
//! empty map and a failed save leaves the previous file in place, both
//! logged. The session keeps running on in-memory state either way.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{NotesError, NotesResult};
use crate::notes::NotesMap;

/// Storage backend for per-year note mappings.
pub trait NotesStore {
    /// Load the persisted map for a year. Absent or corrupt data yields an
    /// empty map.
    fn load(&self, year: i32) -> NotesMap;

    /// Persist the whole map for a year, replacing previous contents.
    fn save(&mut self, year: i32, notes: &NotesMap);
}

/// File-backed store: one JSON file per year in the data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        FileStore { data_dir }
    }

    fn path_for(&self, year: i32) -> PathBuf {
        self.data_dir.join(format!("calendarNotes_{}.json", year))
    }

    fn try_save(&self, year: i32, notes: &NotesMap) -> NotesResult<()> {
        std::fs::create_dir_all(&self.data_dir)?;

        let path = self.path_for(year);
        let temp = path.with_extension("json.tmp");

        let content = serde_json::to_string_pretty(notes)
            .map_err(|e| NotesError::Serialization(e.to_string()))?;

        // Atomic replace: write the temp file, then rename over the target.
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

impl NotesStore for FileStore {
    fn load(&self, year: i32) -> NotesMap {
        let path = self.path_for(year);
        if !path.exists() {
            return NotesMap::new();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return NotesMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(notes) => notes,
            Err(e) => {
                log::warn!("Ignoring corrupt notes file {}: {}", path.display(), e);
                NotesMap::new()
            }
        }
    }

    fn save(&mut self, year: i32, notes: &NotesMap) {
        if let Err(e) = self.try_save(year, notes) {
            log::warn!("Could not save notes for {}: {}", year, e);
        }
    }
}

/// In-memory store, used by tests and as a fallback when no data directory
/// is usable.
#[derive(Default)]
pub struct MemoryStore {
    years: HashMap<i32, NotesMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotesStore for MemoryStore {
    fn load(&self, year: i32) -> NotesMap {
        self.years.get(&year).cloned().unwrap_or_default()
    }

    fn save(&mut self, year: i32, notes: &NotesMap) {
        self.years.insert(year, notes.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_notes() -> NotesMap {
        let mut notes = NotesMap::new();
        notes.insert("2025-09-01".to_string(), "dentist".to_string());
        notes.insert("2025-10-12".to_string(), "trip".to_string());
        notes
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let notes = sample_notes();
        store.save(2025, &notes);
        assert_eq!(store.load(2025), notes);
    }

    #[test]
    fn test_file_store_missing_year_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load(1999).is_empty());
    }

    #[test]
    fn test_file_store_years_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.save(2025, &sample_notes());
        assert!(store.load(2026).is_empty());
        assert_eq!(store.load(2025).len(), 2);
    }

    #[test]
    fn test_file_store_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendarNotes_2025.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load(2025).is_empty());
    }

    #[test]
    fn test_file_store_uses_expected_filename() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.save(2025, &sample_notes());
        assert!(dir.path().join("calendarNotes_2025.json").exists());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        store.save(2025, &sample_notes());
        assert_eq!(store.load(2025), sample_notes());
        assert!(store.load(2026).is_empty());
    }
}
