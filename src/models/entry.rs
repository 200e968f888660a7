//! Day entry model and related types.
//!
//! This module defines the DayEntry struct and the EntryKind/AbsenceKind
//! enums for representing recorded days in the work-hour tracker, along with
//! the ephemeral Shift input a normal workday is derived from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the kind of a recorded day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A normal workday with clock-in/clock-out times and a pause.
    Normal,
    /// A vacation day, credited at the configured workday length.
    Vacation,
    /// A sick day, credited at the configured workday length.
    Sick,
}

/// Represents an absence day (a day entry without clock times).
///
/// A dedicated two-variant enum so that a [`EntryKind::Normal`] entry cannot
/// be constructed through the absence-derivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceKind {
    /// A vacation day.
    Vacation,
    /// A sick day.
    Sick,
}

impl From<AbsenceKind> for EntryKind {
    fn from(kind: AbsenceKind) -> Self {
        match kind {
            AbsenceKind::Vacation => EntryKind::Vacation,
            AbsenceKind::Sick => EntryKind::Sick,
        }
    }
}

/// Represents the clock readings of a single worked shift.
///
/// All fields are minutes. `start_minute` and `end_minute` are minutes since
/// local midnight in `[0, 1439]`; a shift whose end reading is numerically
/// smaller than its start reading is treated as crossing midnight by the
/// accounting functions. The shift is an ephemeral input and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The clock-in reading, minutes since midnight.
    pub start_minute: i64,
    /// The clock-out reading, minutes since midnight.
    pub end_minute: i64,
    /// The unpaid pause duration in minutes.
    pub pause_minutes: i64,
}

/// Represents one recorded day for a user.
///
/// For [`EntryKind::Normal`] entries the minute totals are derived from a
/// [`Shift`]; for vacation and sick days `worked_minutes` carries the fixed
/// policy credit and `night_minutes` is zero. Entries are keyed by date by
/// the surrounding store; the engine only reads them.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timecard_engine::models::{DayEntry, EntryKind};
///
/// let entry = DayEntry {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     kind: EntryKind::Normal,
///     worked_minutes: 480,
///     night_minutes: 0,
/// };
/// assert_eq!(entry.kind, EntryKind::Normal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The kind of day recorded.
    pub kind: EntryKind,
    /// Worked minutes for the day (or the absence credit).
    pub worked_minutes: i64,
    /// Minutes of the day that fall in the night-bonus window.
    pub night_minutes: i64,
}
