//! Domain types for the pricing engine.
//!
//! A `Selection` is rebuilt from scratch on every user edit and a fresh
//! `CostBreakdown` is computed from it each time - there is no cached or
//! incremental state anywhere in the engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable tent category from the glamping catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TentType {
    DeluxeDouble,
    Deluxe,
    Standard,
    BasicDouble,
}

/// Food-and-beverage service level. `None` means the party opted out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FbTier {
    #[default]
    None,
    Standard,
    Premium,
    Byoc,
}

/// Everything the user has currently selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub attendee_count: u32,
    pub day_count: u32,
    /// Tent counts by type. Types absent from the map count as zero.
    pub tent_counts: BTreeMap<TentType, u32>,
    pub fb_tier: FbTier,
}

/// One tax or fee line, applied as a percentage of the pre-tax subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxLine {
    pub name: String,
    pub amount: Decimal,
}

/// Itemized output of the pricing engine.
///
/// Invariants: `subtotal == base_package + accommodation_cost + fb_cost`,
/// each tax amount is exactly its rule's rate times `subtotal`, and
/// `total == subtotal + sum(taxes)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    pub base_package: Decimal,
    pub accommodation_cost: Decimal,
    pub fb_cost: Decimal,
    /// Informational only - not part of any cost component.
    pub sleeping_capacity: u32,
    pub subtotal: Decimal,
    pub taxes: Vec<TaxLine>,
    pub total: Decimal,
}
