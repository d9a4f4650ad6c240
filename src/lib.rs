//! Ridgeline Events pricing API.
//!
//! An axum service wrapping a pure pricing engine: event-package estimates
//! from attendee count, event duration, tent selections, and a
//! food-and-beverage tier. No database and no persistence - the rate tables
//! are fixed at startup and every estimate is computed from scratch.

pub mod error;
pub mod pricing;

use std::sync::Arc;

use crate::pricing::rates::RateTables;

/// Shared application state.
///
/// Rate tables are read-only after startup, so handlers share them without
/// any locking.
#[derive(Clone)]
pub struct AppState {
    pub rates: Arc<RateTables>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rates: Arc::new(RateTables::standard()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
