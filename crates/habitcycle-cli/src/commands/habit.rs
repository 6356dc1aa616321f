//! Habit management commands for CLI.

use clap::Subcommand;
use habitcycle_core::stats::habit_summaries;
use habitcycle_core::{is_hex_color, ValidationError, PALETTE};
use rand::seq::SliceRandom;

use crate::common::{one_based, open_tracker, report, CliResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a habit to the active month
    Add {
        /// Habit name
        name: String,
        /// Hex color (#rgb or #rrggbb); random palette color if omitted
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a habit
    Delete {
        /// Habit position (1-based)
        #[arg(value_parser = one_based)]
        habit: usize,
    },
    /// Move a habit to another position
    Move {
        /// Current position (1-based)
        #[arg(value_parser = one_based)]
        from: usize,
        /// New position (1-based)
        #[arg(value_parser = one_based)]
        to: usize,
    },
    /// List habits in the active month
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HabitAction, month: Option<&str>) -> CliResult {
    let (config, mut tracker) = open_tracker(month)?;

    match action {
        HabitAction::Add { name, color } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::EmptyName.into());
            }
            let color = match color {
                Some(c) if is_hex_color(&c) => c,
                Some(c) => return Err(ValidationError::InvalidColor(c).into()),
                None => config
                    .palette
                    .colors
                    .choose(&mut rand::thread_rng())
                    .cloned()
                    .unwrap_or_else(|| PALETTE[0].to_string()),
            };
            report(tracker.add_habit(name, &color)?);
        }
        HabitAction::Delete { habit } => {
            report(tracker.delete_habit(habit)?);
        }
        HabitAction::Move { from, to } => {
            report(tracker.reorder_habits(from, to)?);
        }
        HabitAction::List { json } => {
            let Some(cycle) = tracker.active_cycle() else {
                return Err("no active cycle".into());
            };
            let summaries = habit_summaries(cycle, tracker.cycle_days());
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
                return Ok(());
            }

            let suffix = if cycle.archived { " (archived)" } else { "" };
            println!("{}{suffix}", cycle.label);
            if summaries.is_empty() {
                println!("No habits yet");
            }
            for (i, s) in summaries.iter().enumerate() {
                println!(
                    "{:>2}. {} ({})  {}/{} ({}%)  streak {} (best {})",
                    i + 1,
                    s.name,
                    s.color,
                    s.done,
                    s.days,
                    s.percent,
                    s.streak.current,
                    s.streak.best
                );
            }
        }
    }
    Ok(())
}
