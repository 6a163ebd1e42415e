pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod set;
pub mod show;

use chrono::Datelike;

/// Year the caller initially wants: the flag if given, else the current
/// calendar year.
pub fn preferred_year(flag: Option<i32>) -> i32 {
    flag.unwrap_or_else(|| chrono::Local::now().year())
}
