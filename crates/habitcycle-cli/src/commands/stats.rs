use clap::Subcommand;
use habitcycle_core::stats::{
    habit_heatmaps, habit_summaries, heatmap, monthly_summary, render_habit_heatmaps,
    render_heatmap, weekly_summary,
};
use habitcycle_core::ValidationError;

use crate::common::{one_based, open_tracker, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Overall completion for the active month
    Summary {
        /// Break down by week
        #[arg(long)]
        weekly: bool,
    },
    /// Per-habit completion, weekly buckets and streaks
    Habits,
    /// Day-by-day completion heatmap
    Heatmap {
        /// Output as JSON instead of a text grid
        #[arg(long)]
        json: bool,
        /// One row per habit instead of the overall grid
        #[arg(long)]
        per_habit: bool,
    },
    /// Current and best streak of one habit
    Streak {
        /// Habit position (1-based)
        #[arg(value_parser = one_based)]
        habit: usize,
    },
}

pub fn run(action: StatsAction, month: Option<&str>) -> CliResult {
    let (_, tracker) = open_tracker(month)?;
    let Some(cycle) = tracker.active_cycle() else {
        return Err("no active cycle".into());
    };
    let days = tracker.cycle_days();

    match action {
        StatsAction::Summary { weekly: false } => {
            println!("{}", serde_json::to_string_pretty(&monthly_summary(cycle))?);
        }
        StatsAction::Summary { weekly: true } => {
            println!("{}", serde_json::to_string_pretty(&weekly_summary(cycle, days))?);
        }
        StatsAction::Habits => {
            println!("{}", serde_json::to_string_pretty(&habit_summaries(cycle, days))?);
        }
        StatsAction::Heatmap {
            json,
            per_habit: true,
        } => {
            let rows = habit_heatmaps(cycle, days);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", cycle.label);
                println!("{}", render_habit_heatmaps(&rows));
            }
        }
        StatsAction::Heatmap {
            json,
            per_habit: false,
        } => {
            let cells = heatmap(cycle, days);
            if json {
                println!("{}", serde_json::to_string_pretty(&cells)?);
            } else {
                println!("{}", cycle.label);
                println!("{}", render_heatmap(&cells));
            }
        }
        StatsAction::Streak { habit } => {
            let Some(h) = cycle.habits.get(habit) else {
                return Err(ValidationError::OutOfBounds {
                    what: "habit".into(),
                    position: habit + 1,
                    len: cycle.habits.len(),
                }
                .into());
            };
            println!("{}", serde_json::to_string_pretty(&h.streak())?);
        }
    }
    Ok(())
}
