//! Terminal rendering of the month grid.
//!
//! One section per month in the configured window: a header line with the
//! month name and day count, then one line per day with its weekday label
//! and note text. Colors follow the original page: Sundays, Mondays,
//! Wednesdays and Fridays in blue, configured highlight days in red.

use chrono::{Datelike, NaiveDate, Weekday};
use daynotes_core::config::GlobalConfig;
use daynotes_core::notes::{date_key, NotesMap};
use owo_colors::OwoColorize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}

fn is_blue_day(weekday: Weekday) -> bool {
    matches!(
        weekday,
        Weekday::Sun | Weekday::Mon | Weekday::Wed | Weekday::Fri
    )
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(0)
}

/// Render the grid for every month in the configured window.
pub fn render_grid(year: i32, notes: &NotesMap, cfg: &GlobalConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    for month in cfg.start_month..=cfg.end_month {
        render_month(year, month, notes, cfg, &mut lines);
    }

    lines.join("\n")
}

fn render_month(
    year: i32,
    month: u32,
    notes: &NotesMap,
    cfg: &GlobalConfig,
    lines: &mut Vec<String>,
) {
    let day_count = days_in_month(year, month);
    let name = MONTH_NAMES[(month as usize).saturating_sub(1) % 12];

    let title = format!("{} {}", name, year);
    let sub = format!("({} days)", day_count);
    lines.push(format!("{} {}", title.bold(), sub.dimmed()));

    for day in 1..=day_count {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let key = date_key(date);
        let weekday = date.weekday();

        let head = format!("{:02} {}", day, weekday_label(weekday));
        let head = if cfg.highlight_days.contains(&format!("{:02}-{:02}", month, day)) {
            head.red().to_string()
        } else if is_blue_day(weekday) {
            head.blue().to_string()
        } else {
            head
        };

        match notes.get(&key) {
            Some(text) => lines.push(format!("  {}  {}", head, text)),
            None => lines.push(format!("  {}", head)),
        }
    }

    lines.push(String::new());
}
