//! Time-Accounting Engine for a personal work-hour tracker.
//!
//! This crate derives worked minutes and night-shift bonus minutes from daily
//! shift entries and aggregates them into monthly and yearly summaries. The
//! accounting functions are pure; persistence and presentation belong to the
//! surrounding application.

#![warn(missing_docs)]

pub mod accounting;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
