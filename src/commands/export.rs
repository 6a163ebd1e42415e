//! Export the persisted notes as pretty-printed JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use daynotes_core::config::GlobalConfig;
use daynotes_core::session::Session;
use daynotes_core::store::FileStore;

use crate::commands::preferred_year;

pub fn run(output: Option<PathBuf>, year: Option<i32>) -> Result<()> {
    let cfg = GlobalConfig::load()?;
    let year = preferred_year(year);

    let session = Session::open(year, FileStore::new(cfg.data_path()));
    let json = session.export_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported notes for {} to {}", year, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
