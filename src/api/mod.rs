//! HTTP API module for the time-accounting engine.
//!
//! This module provides the REST API endpoints the surrounding tracker
//! application calls to derive day entries and compute summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeriveEntryRequest, SummaryRequest};
pub use response::{ApiError, DeriveEntryResponse, SummaryResponse};
pub use state::AppState;
