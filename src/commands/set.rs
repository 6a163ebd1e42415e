//! Set or clear the note for a single day.

use anyhow::Result;
use chrono::Datelike;
use daynotes_core::config::GlobalConfig;
use daynotes_core::notes::parse_date_key;
use daynotes_core::session::Session;
use daynotes_core::store::FileStore;

pub fn run(date: &str, text: &str) -> Result<()> {
    let parsed = parse_date_key(date).map_err(|e| anyhow::anyhow!(e))?;
    let year = parsed.year();

    let cfg = GlobalConfig::load()?;
    let mut session = Session::open(year, FileStore::new(cfg.data_path()));
    session.apply_edit(date, text);

    if text.trim().is_empty() {
        println!("Cleared note for {}", date);
    } else {
        println!("Set note for {}", date);
    }

    Ok(())
}
