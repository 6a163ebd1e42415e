//! Global daynotes configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::error::{NotesError, NotesResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/daynotes";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_start_month() -> u32 {
    9
}

fn default_end_month() -> u32 {
    11
}

fn default_debounce_ms() -> u64 {
    400
}

fn default_highlight_days() -> Vec<String> {
    vec!["11-03".to_string(), "11-04".to_string()]
}

/// Global configuration at ~/.config/daynotes/config.toml
///
/// Every field has a default, so a missing config file yields a working
/// setup (local-only, September through November, 400ms quiescence).
#[derive(Debug, Deserialize, Clone)]
pub struct GlobalConfig {
    /// Directory holding the per-year note files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// URL of the remote notes document fetched at startup (e.g.
    /// `https://example.org/calendar-notes.json`). Local-only when unset.
    pub notes_url: Option<String>,

    /// First and last month of the rendered grid, inclusive.
    #[serde(default = "default_start_month")]
    pub start_month: u32,
    #[serde(default = "default_end_month")]
    pub end_month: u32,

    /// Quiescence window for coalescing rapid edits, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Days highlighted in red, as `MM-DD` strings.
    #[serde(default = "default_highlight_days")]
    pub highlight_days: Vec<String>,
}

impl GlobalConfig {
    pub fn config_path() -> NotesResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| NotesError::Config("Could not determine config directory".into()))?
            .join("daynotes");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> NotesResult<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| NotesError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| NotesError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> NotesResult<()> {
        if !(1..=12).contains(&self.start_month) || !(1..=12).contains(&self.end_month) {
            return Err(NotesError::Config(
                "start_month and end_month must be between 1 and 12".into(),
            ));
        }
        if self.start_month > self.end_month {
            return Err(NotesError::Config(
                "start_month must not be after end_month".into(),
            ));
        }
        Ok(())
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_months(start: u32, end: u32) -> GlobalConfig {
        GlobalConfig {
            data_dir: default_data_dir(),
            notes_url: None,
            start_month: start,
            end_month: end,
            debounce_ms: default_debounce_ms(),
            highlight_days: default_highlight_days(),
        }
    }

    #[test]
    fn test_validate_accepts_default_window() {
        assert!(config_with_months(9, 11).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_months() {
        assert!(config_with_months(0, 11).validate().is_err());
        assert!(config_with_months(9, 13).validate().is_err());
        assert!(config_with_months(10, 9).validate().is_err());
    }

    #[test]
    fn test_data_path_passes_absolute_dirs_through() {
        let mut cfg = config_with_months(9, 11);
        cfg.data_dir = PathBuf::from("/tmp/daynotes-test");
        assert_eq!(cfg.data_path(), PathBuf::from("/tmp/daynotes-test"));
    }
}
