//! Time-accounting logic.
//!
//! This module contains the pure accounting functions of the tracker:
//! clock-time parsing and formatting, worked-minute derivation with a shared
//! overnight wrap, the night-bonus calculation, day-entry derivation, and the
//! monthly and yearly aggregations. Nothing here performs I/O or holds state;
//! every function receives the values it needs and returns a derived value.

mod clock;
mod derive;
mod monthly;
mod night_bonus;
mod vacation;
mod worked_time;

pub use clock::{format_minutes_as_clock, parse_clock_time};
pub use derive::{derive_absence_entry, derive_shift_entry};
pub use monthly::{MonthKey, summarize_month};
pub use night_bonus::{
    NIGHT_WINDOW_END_MINUTE, NIGHT_WINDOW_START_MINUTE, compute_night_minutes,
};
pub use vacation::summarize_vacation;
pub use worked_time::{MINUTES_PER_DAY, compute_worked_minutes, effective_end_minute};
