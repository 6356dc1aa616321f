//! Month rollover.
//!
//! Ensures the store has a cycle for the current month, makes it active, and
//! archives every other cycle. A missing cycle is seeded from the most
//! recently inserted one: habit names and colors carry over, completion
//! marks do not.

use chrono::NaiveDate;
use serde::Serialize;

use super::{month_key, month_label, Cycle, Store};

/// What a rollover did to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rollover {
    /// Month key that is now active.
    pub key: String,
    /// Whether a new cycle was inserted for `key`.
    pub created: bool,
    /// Habits copied into the new cycle (0 when nothing was created).
    pub carried_habits: usize,
    /// Cycles left archived afterwards.
    pub archived: usize,
}

/// Roll the store over to the month containing `today`.
pub fn roll_over(store: &mut Store, today: NaiveDate, cycle_days: usize) -> Rollover {
    let key = month_key(today);

    let mut created = false;
    let mut carried_habits = 0;
    if !store.cycles.contains_key(&key) {
        let habits: Vec<_> = store
            .cycles
            .last()
            .map(|(_, last)| {
                last.habits
                    .iter()
                    .map(|h| h.carried_over(cycle_days))
                    .collect()
            })
            .unwrap_or_default();
        carried_habits = habits.len();
        store
            .cycles
            .insert(key.clone(), Cycle::new(month_label(today), habits));
        created = true;
    }

    store.active = Some(key.clone());

    let mut archived = 0;
    for (k, cycle) in store.cycles.iter_mut() {
        cycle.archived = *k != key;
        if cycle.archived {
            archived += 1;
        }
    }

    Rollover {
        key,
        created,
        carried_habits,
        archived,
    }
}
