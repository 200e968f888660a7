//! Worked-time derivation for a single shift.
//!
//! The overnight wrap lives in exactly one place here. Both the worked-minute
//! total and the night-bonus scan go through [`effective_end_minute`], so the
//! two can never disagree about the length of a shift.

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Returns the wrap-adjusted end minute of a shift.
///
/// A shift whose end reading is numerically smaller than its start reading
/// crosses midnight; its end is shifted forward by one day so the shift spans
/// `[start_minute, end_minute)` in absolute minutes. An end reading equal to
/// the start is NOT wrapped and yields a zero-length shift.
///
/// # Examples
///
/// ```
/// use timecard_engine::accounting::effective_end_minute;
///
/// // 22:00 -> 06:00 crosses midnight.
/// assert_eq!(effective_end_minute(1320, 360), 1800);
/// // 09:00 -> 17:00 does not.
/// assert_eq!(effective_end_minute(540, 1020), 1020);
/// // start == end is zero-length, not a 24h wrap.
/// assert_eq!(effective_end_minute(1320, 1320), 1320);
/// ```
pub fn effective_end_minute(start_minute: i64, end_minute: i64) -> i64 {
    if end_minute < start_minute {
        end_minute + MINUTES_PER_DAY
    } else {
        end_minute
    }
}

/// Calculates the worked minutes of a shift, net of the pause.
///
/// The end minute is wrap-adjusted via [`effective_end_minute`] and the pause
/// is subtracted from the span. A pause longer than the shift clamps the
/// result to zero rather than going negative, matching the night-bonus scan
/// which likewise cannot exclude more minutes than the shift contains.
///
/// # Examples
///
/// ```
/// use timecard_engine::accounting::compute_worked_minutes;
///
/// // 09:00 -> 17:00 with a 60-minute pause.
/// assert_eq!(compute_worked_minutes(540, 1020, 60), 420);
/// // 22:00 -> 06:00 overnight with a 30-minute pause.
/// assert_eq!(compute_worked_minutes(1320, 360, 30), 450);
/// ```
pub fn compute_worked_minutes(start_minute: i64, end_minute: i64, pause_minutes: i64) -> i64 {
    let end_minute = effective_end_minute(start_minute, end_minute);
    (end_minute - start_minute - pause_minutes).max(0)
}
