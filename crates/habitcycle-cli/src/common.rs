//! Shared plumbing for CLI commands.

use chrono::NaiveDate;
use habitcycle_core::{
    Clock, Config, Database, FixedClock, HabitTracker, Outcome, SystemClock, TrackerSettings,
};

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub type Tracker = HabitTracker<Database, FixedClock>;

/// Today's date, overridable with `HABITCYCLE_TODAY=YYYY-MM-DD`.
pub fn today() -> CliResult<NaiveDate> {
    match std::env::var("HABITCYCLE_TODAY") {
        Ok(value) => match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Ok(date) => Ok(date),
            Err(e) => Err(format!("HABITCYCLE_TODAY '{value}': {e}").into()),
        },
        Err(_) => Ok(SystemClock.today()),
    }
}

/// Load config and open the tracker on the on-disk database.
///
/// Opening rolls the store over to the current month. With `month` set,
/// that stored month becomes active for this invocation; the next open
/// rolls back to the current month.
pub fn open_tracker(month: Option<&str>) -> CliResult<(Config, Tracker)> {
    let config = Config::load()?;
    let db = Database::open()?;
    let mut tracker =
        HabitTracker::open(db, FixedClock(today()?), TrackerSettings::from(&config))?;
    if let Some(key) = month {
        tracker.set_active_month(key)?;
    }
    Ok((config, tracker))
}

/// Parse a 1-based position from the command line into a 0-based index.
pub fn one_based(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(n) => Ok(n - 1),
        Err(e) => Err(format!("'{s}' is not a position: {e}")),
    }
}

/// Print a mutation outcome.
pub fn report(outcome: Outcome) {
    match outcome {
        Outcome::Applied => println!("ok"),
        Outcome::Ignored { reason } => println!("ignored: {reason}"),
    }
}
