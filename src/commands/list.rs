//! List the persisted notes for a year.

use anyhow::Result;
use daynotes_core::config::GlobalConfig;
use daynotes_core::store::{FileStore, NotesStore};
use owo_colors::OwoColorize;

use crate::commands::preferred_year;

pub fn run(year: Option<i32>) -> Result<()> {
    let cfg = GlobalConfig::load()?;
    let year = preferred_year(year);

    let store = FileStore::new(cfg.data_path());
    let notes = store.load(year);

    if notes.is_empty() {
        println!("No notes stored for {}.", year);
        return Ok(());
    }

    for (key, text) in &notes {
        println!("{}  {}", key.blue(), text);
    }
    println!("\n{} notes for {}.", notes.len(), year);

    Ok(())
}
