//! Policy configuration for the time-accounting engine.
//!
//! This module provides functionality to load the tracker policy from YAML
//! files: the workday absence credit and the annual vacation allowance.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tracker").unwrap();
//! println!("Allowance: {} days", config.vacation_allowance_days());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllowanceConfig, TrackerConfig, TrackerPolicy, VacationAllowance, WorkdayPolicy};
