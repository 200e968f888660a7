//! Derived summary models.
//!
//! This module defines the aggregate values computed from a collection of
//! day entries. Summaries are derived on demand and never stored.

use serde::{Deserialize, Serialize};

/// Per-kind day counts within a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Number of normal workdays.
    pub normal: u32,
    /// Number of vacation days.
    pub vacation: u32,
    /// Number of sick days.
    pub sick: u32,
}

impl DayCounts {
    /// Returns the total number of recorded days.
    pub fn total(&self) -> u32 {
        self.normal + self.vacation + self.sick
    }
}

/// The aggregate totals for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Total worked minutes across all entries in the month.
    pub worked_minutes: i64,
    /// Total night-bonus minutes across all entries in the month.
    pub night_minutes: i64,
    /// Entry counts per kind.
    pub day_counts: DayCounts,
}

/// Vacation usage for one calendar year against the configured allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationSummary {
    /// The year the summary covers.
    pub year: i32,
    /// Number of vacation days recorded in the year.
    pub used: u32,
    /// The configured annual vacation allowance in days.
    pub allowance: u32,
    /// Days left of the allowance, never negative.
    pub remaining: u32,
}
