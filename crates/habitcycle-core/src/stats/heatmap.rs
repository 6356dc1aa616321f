//! Day heatmap.
//!
//! One cell per day slot: how many habits were completed that day and an
//! intensity level from 0 (nothing) to 4 (more than three quarters).
//! Per-habit rows use the same cells with a single habit, so a day is either
//! level 0 or level 4.

use serde::{Deserialize, Serialize};

use crate::cycle::{Cycle, Habit};

/// Heatmap cell data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// 1-based day of the cycle.
    pub day: usize,
    pub completed: usize,
    pub habits: usize,
    /// `completed / habits`, 0.0 with no habits.
    pub ratio: f64,
    pub level: u8,
}

impl HeatmapCell {
    fn new(day: usize, completed: usize, habits: usize) -> Self {
        let ratio = if habits == 0 {
            0.0
        } else {
            completed as f64 / habits as f64
        };
        Self {
            day,
            completed,
            habits,
            ratio,
            level: Self::level_for(ratio),
        }
    }

    fn level_for(ratio: f64) -> u8 {
        if ratio <= 0.0 {
            0
        } else if ratio <= 0.25 {
            1
        } else if ratio <= 0.5 {
            2
        } else if ratio <= 0.75 {
            3
        } else {
            4
        }
    }

    /// Get the character for ASCII heatmap visualization.
    pub fn heat_char(&self) -> char {
        match self.level {
            0 => '·',
            1 => '░',
            2 => '▒',
            3 => '▓',
            _ => '█',
        }
    }
}

/// Build the heatmap for `cycle_days` day slots.
pub fn heatmap(cycle: &Cycle, cycle_days: usize) -> Vec<HeatmapCell> {
    let habits = cycle.habits.len();
    (0..cycle_days)
        .map(|i| {
            let completed = cycle
                .habits
                .iter()
                .filter(|h| h.days.get(i).copied().unwrap_or(false))
                .count();
            HeatmapCell::new(i + 1, completed, habits)
        })
        .collect()
}

/// One habit's day-by-day row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitHeatmap {
    pub name: String,
    pub color: String,
    pub cells: Vec<HeatmapCell>,
}

fn habit_row(habit: &Habit, cycle_days: usize) -> HabitHeatmap {
    let cells = (0..cycle_days)
        .map(|i| {
            let completed = usize::from(habit.days.get(i).copied().unwrap_or(false));
            HeatmapCell::new(i + 1, completed, 1)
        })
        .collect();
    HabitHeatmap {
        name: habit.name.clone(),
        color: habit.color.clone(),
        cells,
    }
}

/// Build one row per habit in display order.
pub fn habit_heatmaps(cycle: &Cycle, cycle_days: usize) -> Vec<HabitHeatmap> {
    cycle
        .habits
        .iter()
        .map(|habit| habit_row(habit, cycle_days))
        .collect()
}

/// Render per-habit rows as `name  cells`, names padded to the same width.
pub fn render_habit_heatmaps(rows: &[HabitHeatmap]) -> String {
    let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            let cells: String = row.cells.iter().map(HeatmapCell::heat_char).collect();
            format!("{:<width$}  {cells}", row.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render cells as rows of seven characters.
pub fn render_heatmap(cells: &[HeatmapCell]) -> String {
    cells
        .chunks(7)
        .map(|week| week.iter().map(HeatmapCell::heat_char).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
