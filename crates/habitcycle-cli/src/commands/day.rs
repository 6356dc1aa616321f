use clap::Subcommand;
use habitcycle_core::Outcome;

use crate::common::{one_based, open_tracker, report, CliResult};

#[derive(Subcommand)]
pub enum DayAction {
    /// Flip a day's completion mark
    Toggle {
        /// Habit position (1-based)
        #[arg(value_parser = one_based)]
        habit: usize,
        /// Day of the month (1-based)
        #[arg(value_parser = one_based)]
        day: usize,
    },
}

pub fn run(action: DayAction, month: Option<&str>) -> CliResult {
    let (_, mut tracker) = open_tracker(month)?;

    match action {
        DayAction::Toggle { habit, day } => {
            let outcome = tracker.toggle_day(habit, day)?;
            if outcome == Outcome::Applied {
                let done = tracker
                    .active_cycle()
                    .and_then(|c| c.habits.get(habit))
                    .and_then(|h| h.days.get(day).copied())
                    .unwrap_or(false);
                println!("day {}: {}", day + 1, if done { "done" } else { "not done" });
            } else {
                report(outcome);
            }
        }
    }
    Ok(())
}
