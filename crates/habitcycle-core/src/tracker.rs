//! Habit tracker: owns the store and applies mutations.
//!
//! ## Lifecycle
//!
//! ```text
//! open: load blob -> roll over to current month -> save
//! mutate: check active cycle and indices -> apply -> save
//! ```
//!
//! Mutations that cannot apply (no active cycle, index out of range,
//! toggling an archived month) return [`Outcome::Ignored`] and leave both
//! the in-memory store and the blob untouched. A failed write is returned
//! as an error after the in-memory change has been made; call
//! [`HabitTracker::save`] to retry.
//!
//! ## Usage
//!
//! ```ignore
//! let mut tracker = HabitTracker::open(Database::open()?, SystemClock, TrackerSettings::from(&config))?;
//! tracker.add_habit("Read", "#0ea5a4")?;
//! tracker.toggle_day(0, 4)?;
//! ```

use std::fmt;

use serde::Serialize;

use crate::clock::Clock;
use crate::cycle::{roll_over, Cycle, Habit, Rollover, Store};
use crate::error::{Result, ValidationError};
use crate::storage::{BlobStore, Config};

/// Result of a mutation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Ignored { reason: IgnoreReason },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    fn ignored(reason: IgnoreReason) -> Self {
        Outcome::Ignored { reason }
    }
}

/// Why a mutation was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IgnoreReason {
    NoActiveCycle,
    HabitOutOfRange { index: usize, len: usize },
    DayOutOfRange { index: usize, len: usize },
    ArchivedCycle,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::NoActiveCycle => write!(f, "no active cycle"),
            IgnoreReason::HabitOutOfRange { index, len } => {
                write!(f, "habit index {index} out of range (cycle has {len})")
            }
            IgnoreReason::DayOutOfRange { index, len } => {
                write!(f, "day index {index} out of range (habit has {len})")
            }
            IgnoreReason::ArchivedCycle => write!(f, "cycle is archived"),
        }
    }
}

/// Knobs the tracker needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub cycle_days: usize,
    pub store_key: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for TrackerSettings {
    fn from(config: &Config) -> Self {
        Self {
            cycle_days: config.cycle.days.max(1),
            store_key: config.storage.store_key.clone(),
        }
    }
}

/// Read the store blob, falling back to an empty store if it is missing or
/// does not parse.
///
/// # Errors
/// Returns an error only if the backend itself fails to read.
pub fn load_store<B: BlobStore>(blobs: &B, key: &str) -> Result<Store> {
    let Some(json) = blobs.get(key)? else {
        return Ok(Store::default());
    };
    match Store::from_json(&json) {
        Ok(store) => Ok(store),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored habits unreadable, starting empty");
            Ok(Store::default())
        }
    }
}

/// Owns the habit store and persists it after every applied mutation.
pub struct HabitTracker<B, C> {
    store: Store,
    blobs: B,
    clock: C,
    settings: TrackerSettings,
    last_rollover: Option<Rollover>,
}

impl<B: BlobStore, C: Clock> HabitTracker<B, C> {
    /// Load the store, roll it over to the current month, and save it.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read or written.
    pub fn open(blobs: B, clock: C, settings: TrackerSettings) -> Result<Self> {
        let store = load_store(&blobs, &settings.store_key)?;
        let mut tracker = Self {
            store,
            blobs,
            clock,
            settings,
            last_rollover: None,
        };
        tracker.rollover()?;
        Ok(tracker)
    }

    /// Make the current month's cycle active, creating it if needed.
    ///
    /// Runs automatically from [`HabitTracker::open`]. Long-lived callers
    /// that cross a month boundary call it again.
    pub fn rollover(&mut self) -> Result<Rollover> {
        let today = self.clock.today();
        let result = roll_over(&mut self.store, today, self.settings.cycle_days);
        if result.created {
            tracing::info!(
                key = %result.key,
                carried = result.carried_habits,
                "created cycle for new month"
            );
        }
        tracing::debug!(key = %result.key, archived = result.archived, "rollover complete");
        self.last_rollover = Some(result.clone());
        self.save()?;
        Ok(result)
    }

    /// The most recent rollover, including the one done by `open`.
    pub fn last_rollover(&self) -> Option<&Rollover> {
        self.last_rollover.as_ref()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn active_key(&self) -> Option<&str> {
        self.store.active.as_deref()
    }

    pub fn active_cycle(&self) -> Option<&Cycle> {
        self.store.active_cycle()
    }

    pub fn cycle_days(&self) -> usize {
        self.settings.cycle_days
    }

    /// Append a habit with an empty record to the active cycle.
    ///
    /// Names are not deduplicated.
    pub fn add_habit(&mut self, name: &str, color: &str) -> Result<Outcome> {
        let habit = Habit::new(name, color, self.settings.cycle_days);
        self.mutate("add_habit", |cycle| {
            cycle.habits.push(habit);
            Outcome::Applied
        })
    }

    /// Remove the habit at `index` from the active cycle.
    pub fn delete_habit(&mut self, index: usize) -> Result<Outcome> {
        self.mutate("delete_habit", |cycle| {
            let len = cycle.habits.len();
            if index >= len {
                return Outcome::ignored(IgnoreReason::HabitOutOfRange { index, len });
            }
            cycle.habits.remove(index);
            Outcome::Applied
        })
    }

    /// Flip one day of one habit in the active cycle.
    ///
    /// Archived cycles are read-only for completion marks.
    pub fn toggle_day(&mut self, habit_index: usize, day_index: usize) -> Result<Outcome> {
        self.mutate("toggle_day", |cycle| {
            if cycle.archived {
                return Outcome::ignored(IgnoreReason::ArchivedCycle);
            }
            let len = cycle.habits.len();
            let Some(habit) = cycle.habits.get_mut(habit_index) else {
                return Outcome::ignored(IgnoreReason::HabitOutOfRange {
                    index: habit_index,
                    len,
                });
            };
            let len = habit.days.len();
            let Some(day) = habit.days.get_mut(day_index) else {
                return Outcome::ignored(IgnoreReason::DayOutOfRange {
                    index: day_index,
                    len,
                });
            };
            *day = !*day;
            Outcome::Applied
        })
    }

    /// Move the habit at `from` so that it ends up at `to`.
    pub fn reorder_habits(&mut self, from: usize, to: usize) -> Result<Outcome> {
        self.mutate("reorder_habits", |cycle| {
            let len = cycle.habits.len();
            for index in [from, to] {
                if index >= len {
                    return Outcome::ignored(IgnoreReason::HabitOutOfRange { index, len });
                }
            }
            let habit = cycle.habits.remove(from);
            cycle.habits.insert(to, habit);
            Outcome::Applied
        })
    }

    /// View a different month.
    ///
    /// Archived flags are left alone, so selecting a past month makes its
    /// days read-only until the next rollover.
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownMonth`] if no cycle has that key.
    pub fn set_active_month(&mut self, key: &str) -> Result<Outcome> {
        if !self.store.cycles.contains_key(key) {
            return Err(ValidationError::UnknownMonth(key.to_string()).into());
        }
        self.store.active = Some(key.to_string());
        tracing::debug!(key, "active month changed");
        self.save()?;
        Ok(Outcome::Applied)
    }

    /// Write the whole store to the blob store.
    ///
    /// # Errors
    /// Returns the backend's write error; the in-memory store is unaffected.
    pub fn save(&self) -> Result<()> {
        let json = self.store.to_json()?;
        self.blobs.set(&self.settings.store_key, &json)?;
        Ok(())
    }

    fn mutate<F>(&mut self, op: &str, f: F) -> Result<Outcome>
    where
        F: FnOnce(&mut Cycle) -> Outcome,
    {
        let outcome = match self.store.active_cycle_mut() {
            Some(cycle) => f(cycle),
            None => Outcome::ignored(IgnoreReason::NoActiveCycle),
        };
        match outcome {
            Outcome::Applied => {
                tracing::debug!(op, "mutation applied");
                self.save()?;
            }
            Outcome::Ignored { reason } => {
                tracing::debug!(op, %reason, "mutation ignored");
            }
        }
        Ok(outcome)
    }
}
