//! Pricing engine module for the package estimator.
//!
//! Pure cost calculations over static rate tables, exposed to the
//! presentation layer over HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod rates;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_breakdown, round_money};
pub use models::{CostBreakdown, FbTier, Selection, TaxLine, TentType};
pub use rates::RateTables;
pub use routes::router;
