//! Clock-time parsing and formatting.
//!
//! Clock readings travel through the tracker as `HH:MM` strings at the
//! boundary and as minutes since midnight inside the engine. Parsing is
//! deliberately permissive about range: only the *shape* of the input is
//! validated, so `"25:99"` parses to 1599 minutes. Historical stored data
//! relies on this; callers wanting strict range checks must add them.

use crate::error::{EngineError, EngineResult};

/// Parses an `HH:MM` clock-time string into minutes since midnight.
///
/// The input is split on the first `:` and both sides are parsed as
/// integers. The hour and minute ranges are not validated.
///
/// # Errors
///
/// Returns [`EngineError::InvalidClockTime`] when the separator is missing
/// or either side is not an integer (including an empty side).
///
/// # Examples
///
/// ```
/// use timecard_engine::accounting::parse_clock_time;
///
/// assert_eq!(parse_clock_time("08:30").unwrap(), 510);
/// assert_eq!(parse_clock_time("00:00").unwrap(), 0);
/// // Range is not validated.
/// assert_eq!(parse_clock_time("25:99").unwrap(), 1599);
/// assert!(parse_clock_time("bad").is_err());
/// ```
pub fn parse_clock_time(text: &str) -> EngineResult<i64> {
    let invalid = || EngineError::InvalidClockTime {
        input: text.to_string(),
    };

    let (hours_part, minutes_part) = text.split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours_part.trim().parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes_part.trim().parse().map_err(|_| invalid())?;

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as a zero-padded `HH:MM` string.
///
/// Computed as `minutes / 60` and `minutes % 60`. Durations beyond one day
/// format with an hour field above 23 (`1500` → `"25:00"`), which is the
/// intended rendering for elapsed time. Callers must not pass negative
/// values; this function does not defend against them.
///
/// # Examples
///
/// ```
/// use timecard_engine::accounting::format_minutes_as_clock;
///
/// assert_eq!(format_minutes_as_clock(510), "08:30");
/// assert_eq!(format_minutes_as_clock(0), "00:00");
/// assert_eq!(format_minutes_as_clock(1500), "25:00");
/// ```
pub fn format_minutes_as_clock(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
