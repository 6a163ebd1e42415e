//! Render the calendar grid for the active year.

use anyhow::Result;
use daynotes_core::config::GlobalConfig;
use daynotes_core::resolver;
use daynotes_core::store::{FileStore, NotesStore};

use crate::commands::preferred_year;
use crate::render;
use crate::source;

pub async fn run(year: Option<i32>) -> Result<()> {
    let cfg = GlobalConfig::load()?;
    let preferred = preferred_year(year);

    // With a remote document configured, the grid shows its resolved notes
    // (local edits are not merged in). Without one, fall back to the
    // persisted store so the grid reflects local edits.
    let (active_year, notes) = match cfg.notes_url.as_deref() {
        Some(url) => {
            let raw = source::fetch_notes_document(url).await;
            let resolution = resolver::resolve(raw.as_ref(), preferred);
            (resolution.active_year, resolution.notes)
        }
        None => {
            let store = FileStore::new(cfg.data_path());
            (preferred, store.load(preferred))
        }
    };

    println!("{}", render::render_grid(active_year, &notes, &cfg));
    Ok(())
}
