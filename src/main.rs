mod commands;
mod render;
mod source;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "daynotes")]
#[command(about = "Render a date-range calendar grid of day notes, persist edits locally, and bulk import/export them as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the calendar grid for the active year
    Show {
        /// Preferred year (defaults to the current calendar year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Set or clear the note for a single day
    Set {
        /// Date key, e.g. 2025-09-01
        date: String,

        /// Note text; empty or whitespace-only clears the note
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Edit notes interactively, one "YYYY-MM-DD text" line at a time
    Edit {
        /// Year to edit (defaults to the current calendar year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Export the persisted notes as pretty-printed JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Year to export (defaults to the current calendar year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Import notes from a JSON file, replacing the year's persisted store
    Import {
        /// JSON file mapping date keys to note text
        file: PathBuf,

        /// Year to import into (defaults to the current calendar year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// List the persisted notes for a year
    List {
        /// Year to list (defaults to the current calendar year)
        #[arg(short, long)]
        year: Option<i32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { year } => commands::show::run(year).await,
        Commands::Set { date, text } => commands::set::run(&date, &text.join(" ")),
        Commands::Edit { year } => commands::edit::run(year).await,
        Commands::Export { output, year } => commands::export::run(output, year),
        Commands::Import { file, year } => commands::import::run(&file, year),
        Commands::List { year } => commands::list::run(year),
    }
}
