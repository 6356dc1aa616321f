//! # habitcycle Core Library
//!
//! This library provides the state management behind the habitcycle habit
//! tracker. Habits live in month-long cycles; every front end (currently the
//! `habitcycle` CLI) is a thin layer over the same core.
//!
//! ## Architecture
//!
//! - **Cycle model**: habits, cycles, the store, month rollover and streaks
//! - **Tracker**: owns the store, applies mutations, persists after each one
//! - **Storage**: blob persistence (SQLite or in-memory) and TOML configuration
//! - **Stats**: monthly, weekly, per-habit and heatmap views over a cycle
//!
//! ## Key Components
//!
//! - [`HabitTracker`]: store controller with injected storage and clock
//! - [`BlobStore`]: key-value persistence seam
//! - [`Config`]: application configuration management
//! - [`streak`]: current and best streak of a completion record

pub mod clock;
pub mod cycle;
pub mod error;
pub mod stats;
pub mod storage;
pub mod theme;
pub mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use cycle::{
    is_hex_color, month_key, month_label, roll_over, streak, Cycle, Habit, Rollover, Store,
    Streak, DEFAULT_CYCLE_DAYS, PALETTE,
};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use storage::{BlobStore, Config, Database, MemoryBlobStore};
pub use theme::Theme;
pub use tracker::{load_store, HabitTracker, IgnoreReason, Outcome, TrackerSettings};
