//! Core data models for the time-accounting engine.
//!
//! This module contains all the domain models used throughout the engine.

mod entry;
mod summary;

pub use entry::{AbsenceKind, DayEntry, EntryKind, Shift};
pub use summary::{DayCounts, MonthlySummary, VacationSummary};
