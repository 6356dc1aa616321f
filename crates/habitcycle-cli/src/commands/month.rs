//! Month (cycle) commands for CLI.

use clap::Subcommand;
use habitcycle_core::stats::{monthly_summary, MonthlySummary};
use serde::Serialize;

use crate::common::{open_tracker, CliResult};

#[derive(Subcommand)]
pub enum MonthAction {
    /// List stored months
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a stored month's totals (e.g. 2025-5)
    ///
    /// Use the global `--month` option to run other commands against it.
    Select {
        /// Month key
        key: String,
    },
    /// Show what opening did for today's month (created, carried, archived)
    Rollover,
}

#[derive(Serialize)]
struct SelectedMonth<'a> {
    key: &'a str,
    label: &'a str,
    archived: bool,
    habits: usize,
    summary: MonthlySummary,
}

#[derive(Serialize)]
struct MonthEntry<'a> {
    key: &'a str,
    label: &'a str,
    archived: bool,
    active: bool,
    habits: usize,
}

pub fn run(action: MonthAction, month: Option<&str>) -> CliResult {
    let (_, mut tracker) = open_tracker(month)?;

    match action {
        MonthAction::List { json } => {
            let active = tracker.active_key();
            let entries: Vec<_> = tracker
                .store()
                .cycles
                .iter()
                .map(|(key, cycle)| MonthEntry {
                    key: key.as_str(),
                    label: &cycle.label,
                    archived: cycle.archived,
                    active: Some(key.as_str()) == active,
                    habits: cycle.habits.len(),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("No months available");
            }
            for e in &entries {
                let marker = if e.active { "*" } else { " " };
                let state = if e.archived { "archived" } else { "current" };
                println!("{marker} {:<8} {:<16} {state}", e.key, e.label);
            }
        }
        MonthAction::Select { key } => {
            tracker.set_active_month(&key)?;
            let Some(cycle) = tracker.active_cycle() else {
                return Err(format!("month {key} has no cycle").into());
            };
            let selected = SelectedMonth {
                key: key.as_str(),
                label: &cycle.label,
                archived: cycle.archived,
                habits: cycle.habits.len(),
                summary: monthly_summary(cycle),
            };
            println!("{}", serde_json::to_string_pretty(&selected)?);
        }
        MonthAction::Rollover => {
            let Some(rollover) = tracker.last_rollover() else {
                return Err("rollover did not run".into());
            };
            println!("{}", serde_json::to_string_pretty(rollover)?);
        }
    }
    Ok(())
}
