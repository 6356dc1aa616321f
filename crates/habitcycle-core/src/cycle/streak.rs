//! Streaks over a habit's completion record.

use serde::{Deserialize, Serialize};

/// Runs of completed days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Completed days counted backward from the last day.
    pub current: usize,
    /// Longest run anywhere in the record.
    pub best: usize,
}

/// Compute the current and best streak of a completion record.
pub fn streak(days: &[bool]) -> Streak {
    let mut best = 0;
    let mut run = 0;
    for &done in days {
        if done {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }

    let current = days.iter().rev().take_while(|d| **d).count();

    Streak { current, best }
}
