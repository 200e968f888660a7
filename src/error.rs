//! Error types for the time-accounting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during time accounting.

use thiserror::Error;

/// The main error type for the time-accounting engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The engine
/// performs no I/O of its own, so every error is raised synchronously; the
/// configuration variants belong to the policy loader, not the accounting
/// functions.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::InvalidClockTime {
///     input: "noon".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid clock time 'noon': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock-time string was not in `HH:MM` form.
    #[error("Invalid clock time '{input}': expected HH:MM")]
    InvalidClockTime {
        /// The text that failed to parse.
        input: String,
    },

    /// A month key string was not in `YYYY-MM` form.
    #[error("Invalid month key '{input}': expected YYYY-MM")]
    InvalidMonthKey {
        /// The text that failed to parse.
        input: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
