//! Monthly aggregation.
//!
//! Reduces a snapshot of day entries to the totals for one calendar month.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DayEntry, EntryKind, MonthlySummary};

/// Identifies one calendar month, parsed from a `YYYY-MM` key.
///
/// The month field is deliberately not range-checked: a key like `"2026-13"`
/// parses fine and simply matches no entry, which mirrors matching entries by
/// string prefix on ISO dates.
///
/// # Examples
///
/// ```
/// use timecard_engine::accounting::MonthKey;
///
/// let key = MonthKey::parse("2026-03").unwrap();
/// assert_eq!(key.year(), 2026);
/// assert_eq!(key.month(), 3);
/// assert_eq!(key.to_string(), "2026-03");
/// assert!(MonthKey::parse("March").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a month key from its parts.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Parses a `YYYY-MM` key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonthKey`] when the separator is missing
    /// or either side is not an integer.
    pub fn parse(text: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonthKey {
            input: text.to_string(),
        };

        let (year_part, month_part) = text.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_part.trim().parse().map_err(|_| invalid())?;
        let month: u32 = month_part.trim().parse().map_err(|_| invalid())?;

        Ok(Self { year, month })
    }

    /// The year of the key.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of the key (1-based, unvalidated).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns true when the date falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = EngineError;

    fn try_from(text: String) -> EngineResult<Self> {
        Self::parse(&text)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// Sums worked and night minutes and counts days per kind for one month.
///
/// A pure reduction over the snapshot: entries outside the month are ignored,
/// and an empty snapshot yields the all-zero summary.
///
/// # Examples
///
/// ```
/// use timecard_engine::accounting::{MonthKey, summarize_month};
///
/// let summary = summarize_month(&[], MonthKey::new(2026, 3));
/// assert_eq!(summary.worked_minutes, 0);
/// assert_eq!(summary.day_counts.total(), 0);
/// ```
pub fn summarize_month(entries: &[DayEntry], month: MonthKey) -> MonthlySummary {
    let mut summary = MonthlySummary::default();

    for entry in entries.iter().filter(|e| month.contains(e.date)) {
        summary.worked_minutes += entry.worked_minutes;
        summary.night_minutes += entry.night_minutes;
        match entry.kind {
            EntryKind::Normal => summary.day_counts.normal += 1,
            EntryKind::Vacation => summary.day_counts.vacation += 1,
            EntryKind::Sick => summary.day_counts.sick += 1,
        }
    }

    summary
}
