//! Habit and cycle data model.
//!
//! A [`Store`] holds one [`Cycle`] per calendar month, keyed by a month key
//! such as `"2025-6"`. Cycles keep insertion order: month rollover seeds the
//! new cycle from whichever cycle was inserted last.

mod rollover;
mod streak;

pub use rollover::{roll_over, Rollover};
pub use streak::{streak, Streak};

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of day slots in a cycle unless configured otherwise.
pub const DEFAULT_CYCLE_DAYS: usize = 30;

/// Default habit colors offered by front ends.
pub const PALETTE: [&str; 12] = [
    "#0ea5a4", "#16a34a", "#7c3aed", "#ea580c", "#e11d48", "#0891b2", "#4d7c0f", "#9333ea",
    "#b45309", "#0f766e", "#be123c", "#1d4ed8",
];

/// A named, colored daily activity.
///
/// `days[i]` is true when the habit was completed on day `i + 1` of the
/// cycle's month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub color: String,
    pub days: Vec<bool>,
}

impl Habit {
    /// A habit with no completed days.
    pub fn new(name: impl Into<String>, color: impl Into<String>, cycle_days: usize) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            days: vec![false; cycle_days],
        }
    }

    /// Same name and color, completion record cleared.
    pub fn carried_over(&self, cycle_days: usize) -> Self {
        Self::new(self.name.clone(), self.color.clone(), cycle_days)
    }

    pub fn completed_days(&self) -> usize {
        self.days.iter().filter(|d| **d).count()
    }

    pub fn streak(&self) -> Streak {
        streak(&self.days)
    }
}

/// The habits and completion record of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Human-readable "Month Year".
    pub label: String,
    pub archived: bool,
    pub habits: Vec<Habit>,
}

impl Cycle {
    pub fn new(label: impl Into<String>, habits: Vec<Habit>) -> Self {
        Self {
            label: label.into(),
            archived: false,
            habits,
        }
    }
}

/// Every cycle ever created plus the key of the one being viewed.
///
/// Serialized as JSON under a single blob key. There is no version field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub cycles: IndexMap<String, Cycle>,
    pub active: Option<String>,
}

impl Store {
    pub fn active_cycle(&self) -> Option<&Cycle> {
        self.active.as_ref().and_then(|key| self.cycles.get(key))
    }

    pub fn active_cycle_mut(&mut self) -> Option<&mut Cycle> {
        let key = self.active.as_ref()?;
        self.cycles.get_mut(key)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Month key for a date, e.g. `"2025-6"` (month not zero-padded).
pub fn month_key(date: NaiveDate) -> String {
    format!("{}-{}", date.year(), date.month())
}

/// English "Month Year" label, e.g. `"June 2025"`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// True for `#rgb` and `#rrggbb`.
pub fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
