pub mod config;
pub mod day;
pub mod habit;
pub mod month;
pub mod stats;
pub mod theme;
