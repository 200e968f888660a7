//! Night-bonus calculation.
//!
//! Minutes worked before 06:00 or at/after 20:00 are eligible for a
//! night-shift bonus. This module counts those minutes for a single shift,
//! excluding the unpaid pause.

use super::worked_time::{MINUTES_PER_DAY, effective_end_minute};

/// First minute of the evening half of the night window (20:00).
pub const NIGHT_WINDOW_START_MINUTE: i64 = 1200;

/// First minute past the morning half of the night window (06:00).
pub const NIGHT_WINDOW_END_MINUTE: i64 = 360;

/// Returns true when a minute-of-day falls in the night window.
fn is_night_minute(minute_of_day: i64) -> bool {
    minute_of_day < NIGHT_WINDOW_END_MINUTE || minute_of_day >= NIGHT_WINDOW_START_MINUTE
}

/// Counts the night-bonus minutes of a shift.
///
/// The shift spans `[start_minute, end_minute)` after wrap adjustment; every
/// minute in that span whose minute-of-day falls before 06:00 or at/after
/// 20:00 counts toward the bonus, except minutes consumed by the pause.
///
/// The pause is not anchored at a caller-supplied time. It is always centered
/// at the temporal midpoint of the shift:
/// `pause_start = start + total/2 - pause/2` (integer division). This is a
/// fixed policy so that no pause-start input is required; with odd lengths
/// the window sits up to one minute before the exact center, and that
/// asymmetry is part of the contract. Pause minutes that the midpoint formula
/// would place outside the shift span simply never match a scanned minute, so
/// the exclusion is implicitly clamped to the shift.
///
/// Returns 0 for a zero-length shift (equal start and end readings, which
/// are not treated as a 24-hour wrap).
///
/// # Examples
///
/// ```
/// use timecard_engine::accounting::compute_night_minutes;
///
/// // 20:00 -> 06:00, no pause: the whole shift is night.
/// assert_eq!(compute_night_minutes(1200, 360, 0), 600);
/// // 09:00 -> 17:00: a daytime shift earns nothing.
/// assert_eq!(compute_night_minutes(540, 1020, 60), 0);
/// // 18:00 -> 22:00: only the minutes from 20:00 count.
/// assert_eq!(compute_night_minutes(1080, 1320, 0), 120);
/// ```
pub fn compute_night_minutes(start_minute: i64, end_minute: i64, pause_minutes: i64) -> i64 {
    let end_minute = effective_end_minute(start_minute, end_minute);
    let total_worked = end_minute - start_minute;
    if total_worked <= 0 {
        return 0;
    }

    let pause_start = start_minute + total_worked / 2 - pause_minutes / 2;
    let pause_end = pause_start + pause_minutes;

    let mut night_minutes = 0;
    for t in start_minute..end_minute {
        if t >= pause_start && t < pause_end {
            continue;
        }
        if is_night_minute(t.rem_euclid(MINUTES_PER_DAY)) {
            night_minutes += 1;
        }
    }

    night_minutes
}
