//! Statistics over a cycle.
//!
//! Monthly and weekly completion ratios, per-habit summaries, and day
//! heatmaps. Everything here is a pure function of a [`crate::Cycle`] and
//! the configured cycle length.

mod heatmap;
mod summary;

pub use heatmap::{
    habit_heatmaps, heatmap, render_habit_heatmaps, render_heatmap, HabitHeatmap, HeatmapCell,
};
pub use summary::{
    habit_summaries, monthly_summary, percent, week_count, weekly_buckets, weekly_summary,
    HabitSummary, MonthlySummary, WeekBucket,
};
