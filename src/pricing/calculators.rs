//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared mutable state.
//! Same inputs always produce bit-identical outputs, so every estimate is
//! recomputed fresh from the current selection and the static rate tables.

use std::collections::BTreeMap;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{CostBreakdown, FbTier, Selection, TaxLine, TentType};
use super::rates::{FbPricing, RateTables};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use ridgeline_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Base package price for the given attendee count.
///
/// Picks the first tier whose attendee ceiling covers the count (tiers are
/// ordered ascending and the last tier is uncapped), then applies the margin
/// multiplier. A count of zero falls into the lowest tier; the API boundary
/// rejects zero before it reaches the engine.
pub fn base_package_price(attendee_count: u32, rates: &RateTables) -> Decimal {
    let base = rates
        .package_tiers
        .iter()
        .find(|tier| {
            tier.max_attendees
                .map_or(true, |max| attendee_count <= max)
        })
        .map(|tier| tier.base_price)
        .unwrap_or(Decimal::ZERO);

    base * rates.margin_multiplier
}

/// Total accommodation cost: per tent type, `count * nightly_rate * days`
/// plus a one-time `count * setup_fee`.
///
/// Counts are taken literally; inventory limits are the boundary's concern.
pub fn accommodation_cost(
    tent_counts: &BTreeMap<TentType, u32>,
    day_count: u32,
    rates: &RateTables,
) -> Decimal {
    let days = Decimal::from(day_count);

    rates
        .tent_catalog
        .iter()
        .map(|spec| {
            let count = Decimal::from(tent_counts.get(&spec.tent_type).copied().unwrap_or(0));
            count * spec.nightly_rate * days + count * spec.setup_fee
        })
        .sum()
}

/// Total sleeping capacity across the selected tents. Informational only.
pub fn total_sleeping_capacity(tent_counts: &BTreeMap<TentType, u32>, rates: &RateTables) -> u32 {
    rates
        .tent_catalog
        .iter()
        .map(|spec| tent_counts.get(&spec.tent_type).copied().unwrap_or(0) * spec.capacity)
        .sum()
}

/// Food-and-beverage cost for the selected tier.
///
/// `FbTier::None` costs nothing. Flat-per-day tiers charge by day count
/// alone; per-person tiers charge per attendee per day.
pub fn fb_cost(tier: FbTier, attendee_count: u32, day_count: u32, rates: &RateTables) -> Decimal {
    let Some(spec) = rates.fb_spec(tier) else {
        return Decimal::ZERO;
    };

    match spec.pricing {
        FbPricing::FlatPerDay(rate) => rate * Decimal::from(day_count),
        FbPricing::PerPersonPerDay(rate) => {
            rate * Decimal::from(attendee_count) * Decimal::from(day_count)
        }
    }
}

/// Compute the full cost breakdown for a selection.
///
/// Each tax line is its rule's rate times the pre-tax subtotal; the rules
/// apply independently, never compounded on each other. Amounts are kept
/// exact here - any display rounding happens in the response layer.
pub fn compute_breakdown(selection: &Selection, rates: &RateTables) -> CostBreakdown {
    let base_package = base_package_price(selection.attendee_count, rates);
    let accommodation = accommodation_cost(&selection.tent_counts, selection.day_count, rates);
    let fb = fb_cost(
        selection.fb_tier,
        selection.attendee_count,
        selection.day_count,
        rates,
    );
    let subtotal = base_package + accommodation + fb;

    let taxes: Vec<TaxLine> = rates
        .tax_rules
        .iter()
        .map(|rule| TaxLine {
            name: rule.name.clone(),
            amount: rule.rate * subtotal,
        })
        .collect();
    let tax_total: Decimal = taxes.iter().map(|line| line.amount).sum();

    CostBreakdown {
        base_package,
        accommodation_cost: accommodation,
        fb_cost: fb,
        sleeping_capacity: total_sleeping_capacity(&selection.tent_counts, rates),
        subtotal,
        taxes,
        total: subtotal + tax_total,
    }
}
