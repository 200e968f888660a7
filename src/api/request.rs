//! Request types for the time-accounting API.
//!
//! This module defines the JSON request structures for the
//! `/entries/derive` and `/summary` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DayEntry, EntryKind};

/// Request body for the `/entries/derive` endpoint.
///
/// For a `normal` entry the clock times are required and the pause defaults
/// to zero; for `vacation` and `sick` entries they are ignored and may be
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveEntryRequest {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The kind of day being recorded.
    pub kind: EntryKind,
    /// The clock-in time as `HH:MM` (required for normal entries).
    #[serde(default)]
    pub start_time: Option<String>,
    /// The clock-out time as `HH:MM` (required for normal entries).
    #[serde(default)]
    pub end_time: Option<String>,
    /// The unpaid pause in minutes (defaults to 0).
    #[serde(default)]
    pub pause_minutes: Option<i64>,
}

/// Request body for the `/summary` endpoint.
///
/// The caller supplies a snapshot of its stored entries; the engine owns no
/// store of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The entry snapshot to aggregate.
    pub entries: Vec<DayEntry>,
    /// The month to summarize, as a `YYYY-MM` key.
    pub month: String,
    /// The year for the vacation summary (defaults to the month key's year).
    #[serde(default)]
    pub vacation_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_request_clock_fields_are_optional() {
        let json = r#"{
            "date": "2026-02-02",
            "kind": "vacation"
        }"#;

        let request: DeriveEntryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind, EntryKind::Vacation);
        assert!(request.start_time.is_none());
        assert!(request.pause_minutes.is_none());
    }

    #[test]
    fn test_derive_request_with_clock_times() {
        let json = r#"{
            "date": "2026-01-15",
            "kind": "normal",
            "start_time": "22:00",
            "end_time": "06:00",
            "pause_minutes": 30
        }"#;

        let request: DeriveEntryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_time.as_deref(), Some("22:00"));
        assert_eq!(request.end_time.as_deref(), Some("06:00"));
        assert_eq!(request.pause_minutes, Some(30));
    }

    #[test]
    fn test_summary_request_vacation_year_is_optional() {
        let json = r#"{
            "entries": [],
            "month": "2026-01"
        }"#;

        let request: SummaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.month, "2026-01");
        assert!(request.vacation_year.is_none());
    }
}
