//! Response DTOs for the pricing API.
//!
//! Monetary amounts serialize as decimal strings to avoid any float
//! round-tripping in clients. Amounts are normalized so trailing zeros from
//! decimal scale arithmetic don't leak into the JSON ("5196.00" -> "5196").

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::round_money;
use super::models::{CostBreakdown, FbTier, TentType};
use super::rates::{FbPricing, RateTables};

/// One tax or fee line in an estimate.
#[derive(Debug, Clone, Serialize)]
pub struct TaxLineResponse {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Full cost breakdown for an estimate request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_package: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub accommodation_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fb_cost: Decimal,
    pub sleeping_capacity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    pub taxes: Vec<TaxLineResponse>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    /// Total split evenly per attendee, banker-rounded to cents.
    #[serde(with = "rust_decimal::serde::str")]
    pub per_attendee_total: Decimal,
}

impl EstimateResponse {
    /// Build the response from an engine breakdown.
    ///
    /// Breakdown amounts stay exact; only the per-attendee share involves
    /// division and therefore rounding.
    pub fn from_breakdown(breakdown: CostBreakdown, attendee_count: u32) -> Self {
        let per_attendee_total = if attendee_count == 0 {
            Decimal::ZERO
        } else {
            round_money(breakdown.total / Decimal::from(attendee_count), 2)
        };

        Self {
            base_package: breakdown.base_package.normalize(),
            accommodation_cost: breakdown.accommodation_cost.normalize(),
            fb_cost: breakdown.fb_cost.normalize(),
            sleeping_capacity: breakdown.sleeping_capacity,
            subtotal: breakdown.subtotal.normalize(),
            taxes: breakdown
                .taxes
                .into_iter()
                .map(|line| TaxLineResponse {
                    name: line.name,
                    amount: line.amount.normalize(),
                })
                .collect(),
            total: breakdown.total.normalize(),
            per_attendee_total: per_attendee_total.normalize(),
        }
    }
}

/// One base-package price bracket in the published rate card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTierResponse {
    /// Absent for the uncapped top tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
}

/// One tent type in the published rate card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TentTypeResponse {
    #[serde(rename = "type")]
    pub tent_type: TentType,
    pub name: String,
    pub description: String,
    pub capacity: u32,
    pub available: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub nightly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub setup_fee: Decimal,
}

/// Pricing rule for an F&B tier, tagged by rule kind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FbPricingResponse {
    PerPersonPerDay(#[serde(with = "rust_decimal::serde::str")] Decimal),
    FlatPerDay(#[serde(with = "rust_decimal::serde::str")] Decimal),
}

/// One F&B tier in the published rate card.
#[derive(Debug, Serialize)]
pub struct FbTierResponse {
    pub tier: FbTier,
    pub name: String,
    pub pricing: FbPricingResponse,
}

/// One tax or fee rule in the published rate card.
#[derive(Debug, Serialize)]
pub struct TaxRuleResponse {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
}

/// The published rate card, so a presentation layer can render options
/// without duplicating the tables.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesResponse {
    pub package_tiers: Vec<PackageTierResponse>,
    #[serde(with = "rust_decimal::serde::str")]
    pub margin_multiplier: Decimal,
    pub tent_types: Vec<TentTypeResponse>,
    pub fb_tiers: Vec<FbTierResponse>,
    pub tax_rules: Vec<TaxRuleResponse>,
}

impl From<&RateTables> for RatesResponse {
    fn from(rates: &RateTables) -> Self {
        Self {
            package_tiers: rates
                .package_tiers
                .iter()
                .map(|tier| PackageTierResponse {
                    max_attendees: tier.max_attendees,
                    base_price: tier.base_price,
                })
                .collect(),
            margin_multiplier: rates.margin_multiplier,
            tent_types: rates
                .tent_catalog
                .iter()
                .map(|spec| TentTypeResponse {
                    tent_type: spec.tent_type,
                    name: spec.name.clone(),
                    description: spec.description.clone(),
                    capacity: spec.capacity,
                    available: spec.available,
                    nightly_rate: spec.nightly_rate,
                    setup_fee: spec.setup_fee,
                })
                .collect(),
            fb_tiers: rates
                .fb_catalog
                .iter()
                .map(|spec| FbTierResponse {
                    tier: spec.tier,
                    name: spec.name.clone(),
                    pricing: match spec.pricing {
                        FbPricing::PerPersonPerDay(rate) => {
                            FbPricingResponse::PerPersonPerDay(rate)
                        }
                        FbPricing::FlatPerDay(rate) => FbPricingResponse::FlatPerDay(rate),
                    },
                })
                .collect(),
            tax_rules: rates
                .tax_rules
                .iter()
                .map(|rule| TaxRuleResponse {
                    name: rule.name.clone(),
                    rate: rule.rate,
                })
                .collect(),
        }
    }
}
