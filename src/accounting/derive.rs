//! Day-entry derivation.
//!
//! Builds a [`DayEntry`] from user input: clock readings for a normal
//! workday, or a fixed policy credit for an absence. Both minute totals of a
//! worked entry come from the shared helpers in this module's siblings, so
//! they always agree on the shift's wrap-adjusted length.

use chrono::NaiveDate;

use crate::models::{AbsenceKind, DayEntry, EntryKind, Shift};

use super::night_bonus::compute_night_minutes;
use super::worked_time::compute_worked_minutes;

/// Derives a [`EntryKind::Normal`] entry from a shift's clock readings.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timecard_engine::accounting::derive_shift_entry;
/// use timecard_engine::models::{EntryKind, Shift};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let shift = Shift {
///     start_minute: 1320, // 22:00
///     end_minute: 360,    // 06:00 next day
///     pause_minutes: 30,
/// };
/// let entry = derive_shift_entry(date, &shift);
/// assert_eq!(entry.kind, EntryKind::Normal);
/// assert_eq!(entry.worked_minutes, 450);
/// assert_eq!(entry.night_minutes, 450);
/// ```
pub fn derive_shift_entry(date: NaiveDate, shift: &Shift) -> DayEntry {
    DayEntry {
        date,
        kind: EntryKind::Normal,
        worked_minutes: compute_worked_minutes(
            shift.start_minute,
            shift.end_minute,
            shift.pause_minutes,
        ),
        night_minutes: compute_night_minutes(
            shift.start_minute,
            shift.end_minute,
            shift.pause_minutes,
        ),
    }
}

/// Derives a vacation or sick entry carrying the fixed workday credit.
///
/// `credit_minutes` is the configured length of a standard workday (480 by
/// default policy). Absences never earn night minutes.
pub fn derive_absence_entry(
    date: NaiveDate,
    kind: AbsenceKind,
    credit_minutes: i64,
) -> DayEntry {
    DayEntry {
        date,
        kind: kind.into(),
        worked_minutes: credit_minutes,
        night_minutes: 0,
    }
}
