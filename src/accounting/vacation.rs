//! Yearly vacation accounting.

use chrono::Datelike;

use crate::models::{DayEntry, EntryKind, VacationSummary};

/// Counts the vacation days used in a year against the configured allowance.
///
/// `remaining` saturates at zero, so overspending the allowance never
/// produces a negative balance.
///
/// # Examples
///
/// ```
/// use timecard_engine::accounting::summarize_vacation;
///
/// let summary = summarize_vacation(&[], 2026, 30);
/// assert_eq!(summary.used, 0);
/// assert_eq!(summary.remaining, 30);
/// ```
pub fn summarize_vacation(entries: &[DayEntry], year: i32, allowance: u32) -> VacationSummary {
    let used = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Vacation && e.date.year() == year)
        .count() as u32;

    VacationSummary {
        year,
        used,
        allowance,
        remaining: allowance.saturating_sub(used),
    }
}
