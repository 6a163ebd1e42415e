//! Interactive note editing with debounced persistence.
//!
//! Reads `YYYY-MM-DD text` lines from stdin. Rapid re-edits of the same day
//! within the quiescence window are coalesced into one write; everything
//! still pending is flushed on EOF.

use std::time::{Duration, Instant};

use anyhow::Result;
use daynotes_core::config::GlobalConfig;
use daynotes_core::notes::{parse_date_key, year_prefix};
use daynotes_core::scheduler::EditScheduler;
use daynotes_core::session::Session;
use daynotes_core::store::FileStore;
use tokio::io::AsyncBufReadExt;

use crate::commands::preferred_year;

pub async fn run(year: Option<i32>) -> Result<()> {
    let cfg = GlobalConfig::load()?;
    let year = preferred_year(year);

    let mut session = Session::open(year, FileStore::new(cfg.data_path()));
    let mut scheduler = EditScheduler::new(Duration::from_millis(cfg.debounce_ms));

    println!(
        "Editing notes for {}. Enter \"YYYY-MM-DD note text\" lines; a date with no text clears it. Ctrl-D to finish.",
        year
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        let next_due = scheduler.next_deadline();

        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => handle_line(&line, year, &mut scheduler),
                    None => break,
                }
            }
            _ = sleep_until(next_due), if next_due.is_some() => {
                for (key, text) in scheduler.take_due(Instant::now()) {
                    session.apply_edit(&key, &text);
                }
            }
        }
    }

    for (key, text) in scheduler.flush() {
        session.apply_edit(&key, &text);
    }

    println!("Saved. {} notes stored for {}.", session.notes().len(), year);
    Ok(())
}

fn handle_line(line: &str, year: i32, scheduler: &mut EditScheduler) {
    if line.trim().is_empty() {
        return;
    }

    match parse_edit_line(line) {
        Some((key, text)) => {
            // Only keys inside the session year are allowed: the active map
            // must never hold stale-year entries.
            if !key.starts_with(&year_prefix(year)) {
                eprintln!("Ignoring {}: outside the active year {}", key, year);
                return;
            }
            scheduler.record(&key, &text, Instant::now());
        }
        None => eprintln!("Ignoring line: expected \"YYYY-MM-DD text\""),
    }
}

fn parse_edit_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_end();
    let (date, text) = match line.split_once(char::is_whitespace) {
        Some((date, text)) => (date, text),
        None => (line, ""),
    };

    parse_date_key(date).ok()?;
    Some((date.to_string(), text.to_string()))
}

async fn sleep_until(deadline: Option<Instant>) {
    if let Some(deadline) = deadline {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
    }
}
