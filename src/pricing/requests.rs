//! Request DTOs for the pricing API.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::AppError;

use super::models::{FbTier, Selection, TentType};
use super::rates::RateTables;

/// Request body for a package estimate.
///
/// Negative or fractional numbers and unrecognized tent or F&B keys are
/// rejected by deserialization before this struct exists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub attendee_count: u32,
    pub day_count: u32,
    #[serde(default)]
    pub accommodation_counts: BTreeMap<TentType, u32>,
    #[serde(default)]
    pub fb_tier: FbTier,
}

impl EstimateRequest {
    /// Validate the request and build a [`Selection`].
    ///
    /// Zero attendees or zero days are rejected outright. Tent counts are
    /// clamped to the catalog's available inventory here; the engine itself
    /// takes whatever counts it is given literally.
    pub fn into_selection(self, rates: &RateTables) -> Result<Selection, AppError> {
        if self.attendee_count == 0 {
            return Err(AppError::validation(
                "attendeeCount",
                "must be a positive integer",
            ));
        }
        if self.day_count == 0 {
            return Err(AppError::validation(
                "dayCount",
                "must be a positive integer",
            ));
        }

        let tent_counts = self
            .accommodation_counts
            .into_iter()
            .map(|(tent_type, count)| {
                let available = rates
                    .tent_spec(tent_type)
                    .map(|spec| spec.available)
                    .unwrap_or(0);
                (tent_type, count.min(available))
            })
            .collect();

        Ok(Selection {
            attendee_count: self.attendee_count,
            day_count: self.day_count,
            tent_counts,
            fb_tier: self.fb_tier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rates() -> RateTables {
        RateTables::standard()
    }

    fn request(body: serde_json::Value) -> Result<EstimateRequest, serde_json::Error> {
        serde_json::from_value(body)
    }

    #[test]
    fn test_deserialize_full_request() {
        let parsed = request(json!({
            "attendeeCount": 100,
            "dayCount": 2,
            "accommodationCounts": {"deluxeDouble": 1, "standard": 2},
            "fbTier": "standard"
        }))
        .unwrap();

        assert_eq!(parsed.attendee_count, 100);
        assert_eq!(parsed.day_count, 2);
        assert_eq!(
            parsed.accommodation_counts.get(&TentType::DeluxeDouble),
            Some(&1)
        );
        assert_eq!(parsed.fb_tier, FbTier::Standard);
    }

    #[test]
    fn test_deserialize_defaults() {
        let parsed = request(json!({"attendeeCount": 60, "dayCount": 1})).unwrap();
        assert!(parsed.accommodation_counts.is_empty());
        assert_eq!(parsed.fb_tier, FbTier::None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_tent_key() {
        assert!(request(json!({
            "attendeeCount": 60,
            "dayCount": 1,
            "accommodationCounts": {"yurt": 1}
        }))
        .is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative_counts() {
        assert!(request(json!({"attendeeCount": -5, "dayCount": 1})).is_err());
        assert!(request(json!({
            "attendeeCount": 60,
            "dayCount": 1,
            "accommodationCounts": {"standard": -1}
        }))
        .is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fb_tier() {
        assert!(request(json!({
            "attendeeCount": 60,
            "dayCount": 1,
            "fbTier": "deluxe"
        }))
        .is_err());
    }

    #[test]
    fn test_into_selection_rejects_zero_attendees() {
        let parsed = request(json!({"attendeeCount": 0, "dayCount": 2})).unwrap();
        let err = parsed.into_selection(&rates()).unwrap_err();
        assert!(err.to_string().contains("attendeeCount"));
    }

    #[test]
    fn test_into_selection_rejects_zero_days() {
        let parsed = request(json!({"attendeeCount": 80, "dayCount": 0})).unwrap();
        let err = parsed.into_selection(&rates()).unwrap_err();
        assert!(err.to_string().contains("dayCount"));
    }

    #[test]
    fn test_into_selection_clamps_to_inventory() {
        // only 20 standard tents in inventory
        let parsed = request(json!({
            "attendeeCount": 80,
            "dayCount": 2,
            "accommodationCounts": {"standard": 25}
        }))
        .unwrap();
        let selection = parsed.into_selection(&rates()).unwrap();
        assert_eq!(selection.tent_counts.get(&TentType::Standard), Some(&20));
    }
}
