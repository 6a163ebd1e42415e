//! Import notes from a JSON file.
//!
//! Unlike the startup fetch, malformed input here is a hard, user-visible
//! error; the persisted store is left unchanged.

use std::path::Path;

use anyhow::{Context, Result};
use daynotes_core::config::GlobalConfig;
use daynotes_core::session::Session;
use daynotes_core::store::FileStore;
use serde_json::Value;

use crate::commands::preferred_year;

pub fn run(file: &Path, year: Option<i32>) -> Result<()> {
    let cfg = GlobalConfig::load()?;
    let year = preferred_year(year);

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let raw: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let mut session = Session::open(year, FileStore::new(cfg.data_path()));
    let count = session
        .import(&raw)
        .with_context(|| format!("Could not import {}", file.display()))?;

    println!("Imported {} notes for {}.", count, year);
    Ok(())
}
