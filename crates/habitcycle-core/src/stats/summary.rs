//! Completion summaries.
//!
//! Weeks are fixed 7-day windows from day 1 (`week = day / 7`). A cycle has
//! `ceil(days / 7)` weeks, so the last week may be short.

use serde::{Deserialize, Serialize};

use crate::cycle::{Cycle, Habit, Streak};

/// Completed marks over the whole cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub done: usize,
    pub total: usize,
    pub percent: u32,
}

/// Completed marks within one week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub done: usize,
    pub total: usize,
}

/// One habit's progress in its cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub name: String,
    pub color: String,
    pub done: usize,
    /// Cycle length the percentage is taken against.
    pub days: usize,
    pub percent: u32,
    pub weeks: Vec<WeekBucket>,
    pub streak: Streak,
}

/// Rounded percentage, 0 when `total` is 0.
pub fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u32
}

/// Number of week buckets for a cycle length.
pub fn week_count(cycle_days: usize) -> usize {
    cycle_days.div_ceil(7)
}

/// Totals over every habit and every recorded day.
pub fn monthly_summary(cycle: &Cycle) -> MonthlySummary {
    let total: usize = cycle.habits.iter().map(|h| h.days.len()).sum();
    let done: usize = cycle.habits.iter().map(Habit::completed_days).sum();
    MonthlySummary {
        done,
        total,
        percent: percent(done, total),
    }
}

/// Week buckets for one completion record.
///
/// Days past the last full bucket of `cycle_days` are not counted.
pub fn weekly_buckets(days: &[bool], cycle_days: usize) -> Vec<WeekBucket> {
    let mut weeks = vec![WeekBucket::default(); week_count(cycle_days)];
    for (i, &done) in days.iter().enumerate() {
        let Some(week) = weeks.get_mut(i / 7) else {
            break;
        };
        week.total += 1;
        if done {
            week.done += 1;
        }
    }
    weeks
}

/// Week buckets summed over every habit in the cycle.
pub fn weekly_summary(cycle: &Cycle, cycle_days: usize) -> Vec<WeekBucket> {
    let mut weeks = vec![WeekBucket::default(); week_count(cycle_days)];
    for habit in &cycle.habits {
        for (sum, week) in weeks.iter_mut().zip(weekly_buckets(&habit.days, cycle_days)) {
            sum.done += week.done;
            sum.total += week.total;
        }
    }
    weeks
}

/// Per-habit summaries in display order.
///
/// Marks past `cycle_days` are not counted, so a record longer than the
/// configured cycle never exceeds 100%.
pub fn habit_summaries(cycle: &Cycle, cycle_days: usize) -> Vec<HabitSummary> {
    cycle
        .habits
        .iter()
        .map(|habit| {
            let done = habit.days.iter().take(cycle_days).filter(|&&d| d).count();
            HabitSummary {
                name: habit.name.clone(),
                color: habit.color.clone(),
                done,
                days: cycle_days,
                percent: percent(done, cycle_days),
                weeks: weekly_buckets(&habit.days, cycle_days),
                streak: habit.streak(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(done: &[usize]) -> Habit {
        let mut h = Habit::new("H", "#000", 30);
        for &d in done {
            h.days[d] = true;
        }
        h
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(30, 30), 100);
    }

    #[test]
    fn thirty_days_make_five_weeks() {
        assert_eq!(week_count(30), 5);
        assert_eq!(week_count(28), 4);
        assert_eq!(week_count(31), 5);
        assert_eq!(week_count(36), 6);
    }

    #[test]
    fn monthly_counts_all_marks() {
        let cycle = Cycle::new("June 2025", vec![habit(&[0, 1, 2]), habit(&[29])]);
        assert_eq!(
            monthly_summary(&cycle),
            MonthlySummary {
                done: 4,
                total: 60,
                percent: 7
            }
        );
        assert_eq!(monthly_summary(&Cycle::new("empty", vec![])).percent, 0);
    }

    #[test]
    fn weekly_last_bucket_is_short() {
        let weeks = weekly_buckets(&habit(&[0, 6, 7, 28, 29]).days, 30);
        assert_eq!(
            weeks,
            vec![
                WeekBucket { done: 2, total: 7 },
                WeekBucket { done: 1, total: 7 },
                WeekBucket { done: 0, total: 7 },
                WeekBucket { done: 0, total: 7 },
                WeekBucket { done: 2, total: 2 },
            ]
        );
    }

    #[test]
    fn long_cycles_are_not_truncated() {
        let mut h = Habit::new("H", "#000", 40);
        h.days[38] = true;
        let weeks = weekly_buckets(&h.days, 40);
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[5], WeekBucket { done: 1, total: 5 });
    }

    #[test]
    fn weekly_summary_sums_habits() {
        let cycle = Cycle::new("June 2025", vec![habit(&[0]), habit(&[1, 14])]);
        let weeks = weekly_summary(&cycle, 30);
        assert_eq!(weeks[0], WeekBucket { done: 2, total: 14 });
        assert_eq!(weeks[2], WeekBucket { done: 1, total: 14 });
        assert_eq!(weeks[4], WeekBucket { done: 0, total: 4 });
    }

    #[test]
    fn habit_summary_includes_streak() {
        let cycle = Cycle::new("June 2025", vec![habit(&[3, 4, 5, 27, 28, 29])]);
        let summary = &habit_summaries(&cycle, 30)[0];
        assert_eq!(summary.done, 6);
        assert_eq!(summary.percent, 20);
        assert_eq!(summary.streak, Streak { current: 3, best: 3 });
        assert_eq!(summary.weeks.len(), 5);
    }

    #[test]
    fn habit_summary_ignores_marks_past_shortened_cycle() {
        let mut h = Habit::new("H", "#000", 31);
        h.days.iter_mut().for_each(|d| *d = true);
        let cycle = Cycle::new("June 2025", vec![h]);

        let summary = &habit_summaries(&cycle, 28)[0];
        assert_eq!(summary.done, 28);
        assert_eq!(summary.days, 28);
        assert_eq!(summary.percent, 100);
        assert_eq!(summary.weeks.iter().map(|w| w.done).sum::<usize>(), 28);
    }
}
