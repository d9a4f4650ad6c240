//! Static rate tables for the package estimator.
//!
//! Built once at startup via [`RateTables::standard`] and shared read-only
//! for the life of the process. Every table is an explicit ordered list of
//! typed records, so lookups never depend on map insertion order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{FbTier, TentType};

/// One attendee-count bracket of the base package price list.
#[derive(Debug, Clone)]
pub struct PackageTier {
    /// Inclusive attendee ceiling; `None` marks the uncapped top tier.
    pub max_attendees: Option<u32>,
    /// Price before the margin multiplier is applied.
    pub base_price: Decimal,
}

/// Catalog entry for a rentable tent type.
///
/// Nightly rate and setup fee are carried per record even though the
/// current price list is uniform across types.
#[derive(Debug, Clone)]
pub struct TentSpec {
    pub tent_type: TentType,
    pub name: String,
    pub description: String,
    /// Sleeping capacity per tent.
    pub capacity: u32,
    /// Units in inventory; selections are clamped to this at the boundary.
    pub available: u32,
    pub nightly_rate: Decimal,
    pub setup_fee: Decimal,
}

/// Pricing rule for a food-and-beverage tier.
#[derive(Debug, Clone, Copy)]
pub enum FbPricing {
    PerPersonPerDay(Decimal),
    FlatPerDay(Decimal),
}

/// Catalog entry for a food-and-beverage tier.
#[derive(Debug, Clone)]
pub struct FbSpec {
    pub tier: FbTier,
    pub name: String,
    pub pricing: FbPricing,
}

/// A tax or fee applied as a percentage of the pre-tax subtotal.
#[derive(Debug, Clone)]
pub struct TaxRule {
    pub name: String,
    pub rate: Decimal,
}

/// All rate tables the engine prices against.
#[derive(Debug, Clone)]
pub struct RateTables {
    /// Ordered ascending by ceiling; the last tier is uncapped.
    pub package_tiers: Vec<PackageTier>,
    pub margin_multiplier: Decimal,
    pub tent_catalog: Vec<TentSpec>,
    pub fb_catalog: Vec<FbSpec>,
    /// Each rule applies independently to the subtotal, not compounded.
    pub tax_rules: Vec<TaxRule>,
}

impl RateTables {
    /// The current published rate card.
    pub fn standard() -> Self {
        Self {
            package_tiers: vec![
                PackageTier {
                    max_attendees: Some(50),
                    base_price: dec!(18700),
                },
                PackageTier {
                    max_attendees: Some(100),
                    base_price: dec!(21300),
                },
                PackageTier {
                    max_attendees: Some(150),
                    base_price: dec!(29800),
                },
                PackageTier {
                    max_attendees: None,
                    base_price: dec!(35700),
                },
            ],
            margin_multiplier: dec!(1.5),
            tent_catalog: vec![
                TentSpec {
                    tent_type: TentType::DeluxeDouble,
                    name: "Deluxe Double Tent".to_string(),
                    description: "Premium tent with 2 queen beds".to_string(),
                    capacity: 4,
                    available: 6,
                    nightly_rate: dec!(150),
                    setup_fee: dec!(150),
                },
                TentSpec {
                    tent_type: TentType::Deluxe,
                    name: "Deluxe Single".to_string(),
                    description: "Premium tent with 1 queen bed".to_string(),
                    capacity: 2,
                    available: 6,
                    nightly_rate: dec!(150),
                    setup_fee: dec!(150),
                },
                TentSpec {
                    tent_type: TentType::Standard,
                    name: "Standard".to_string(),
                    description: "Comfortable tent with 1 full bed".to_string(),
                    capacity: 2,
                    available: 20,
                    nightly_rate: dec!(150),
                    setup_fee: dec!(150),
                },
                TentSpec {
                    tent_type: TentType::BasicDouble,
                    name: "Basic Double".to_string(),
                    description: "2 twin beds".to_string(),
                    capacity: 2,
                    available: 18,
                    nightly_rate: dec!(150),
                    setup_fee: dec!(150),
                },
            ],
            fb_catalog: vec![
                FbSpec {
                    tier: FbTier::Standard,
                    name: "Standard Package".to_string(),
                    pricing: FbPricing::PerPersonPerDay(dec!(50)),
                },
                FbSpec {
                    tier: FbTier::Premium,
                    name: "Premium Package".to_string(),
                    pricing: FbPricing::PerPersonPerDay(dec!(65)),
                },
                FbSpec {
                    tier: FbTier::Byoc,
                    name: "Bring Your Own Chef".to_string(),
                    pricing: FbPricing::FlatPerDay(dec!(1200)),
                },
            ],
            tax_rules: vec![
                TaxRule {
                    name: "Occupancy Tax".to_string(),
                    rate: dec!(0.12),
                },
                TaxRule {
                    name: "Sales Tax".to_string(),
                    rate: dec!(0.0875),
                },
                TaxRule {
                    name: "Administrative Fee".to_string(),
                    rate: dec!(0.04),
                },
            ],
        }
    }

    /// Look up the catalog entry for a tent type.
    pub fn tent_spec(&self, tent_type: TentType) -> Option<&TentSpec> {
        self.tent_catalog
            .iter()
            .find(|spec| spec.tent_type == tent_type)
    }

    /// Look up the catalog entry for an F&B tier. `FbTier::None` has no
    /// catalog entry.
    pub fn fb_spec(&self, tier: FbTier) -> Option<&FbSpec> {
        self.fb_catalog.iter().find(|spec| spec.tier == tier)
    }
}

impl Default for RateTables {
    fn default() -> Self {
        Self::standard()
    }
}
