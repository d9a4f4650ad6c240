//! HTTP route handlers for the pricing API.
//!
//! Every request is handled statelessly: the only shared data is the
//! read-only rate tables in [`AppState`], so requests never contend.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::calculators::compute_breakdown;
use super::requests::EstimateRequest;
use super::responses::{EstimateResponse, RatesResponse};

/// Build the pricing API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/estimate", post(estimate))
        .route("/api/pricing/rates", get(rates))
        .route("/health", get(health))
}

/// Compute a full cost breakdown for the requested selection.
async fn estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>> {
    let selection = request.into_selection(&state.rates)?;

    tracing::debug!(
        attendees = selection.attendee_count,
        days = selection.day_count,
        fb_tier = ?selection.fb_tier,
        "computing package estimate"
    );

    let breakdown = compute_breakdown(&selection, &state.rates);
    Ok(Json(EstimateResponse::from_breakdown(
        breakdown,
        selection.attendee_count,
    )))
}

/// Return the published rate card.
async fn rates(State(state): State<AppState>) -> Json<RatesResponse> {
    Json(RatesResponse::from(state.rates.as_ref()))
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        router().with_state(AppState::new())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_estimate(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/pricing/estimate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_estimate_end_to_end() {
        let (status, body) = send(post_estimate(json!({
            "attendeeCount": 100,
            "dayCount": 2,
            "accommodationCounts": {
                "deluxeDouble": 1,
                "deluxe": 0,
                "standard": 2,
                "basicDouble": 0
            },
            "fbTier": "standard"
        })))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["basePackage"], json!("31950"));
        assert_eq!(body["accommodationCost"], json!("1350"));
        assert_eq!(body["fbCost"], json!("10000"));
        assert_eq!(body["sleepingCapacity"], json!(8));
        assert_eq!(body["subtotal"], json!("43300"));
        assert_eq!(body["taxes"][0]["name"], json!("Occupancy Tax"));
        assert_eq!(body["taxes"][0]["amount"], json!("5196"));
        assert_eq!(body["taxes"][1]["amount"], json!("3788.75"));
        assert_eq!(body["taxes"][2]["amount"], json!("1732"));
        assert_eq!(body["total"], json!("54016.75"));
        assert_eq!(body["perAttendeeTotal"], json!("540.17"));
    }

    #[tokio::test]
    async fn test_estimate_defaults_to_no_tents_no_fb() {
        let (status, body) = send(post_estimate(json!({
            "attendeeCount": 40,
            "dayCount": 1
        })))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["basePackage"], json!("28050"));
        assert_eq!(body["fbCost"], json!("0"));
        assert_eq!(body["sleepingCapacity"], json!(0));
    }

    #[tokio::test]
    async fn test_estimate_rejects_zero_attendees() {
        let (status, body) = send(post_estimate(json!({
            "attendeeCount": 0,
            "dayCount": 2
        })))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], json!("validation_error"));
        assert_eq!(body["details"]["field"], json!("attendeeCount"));
    }

    #[tokio::test]
    async fn test_estimate_rejects_unknown_fb_tier() {
        let (status, _body) = send(post_estimate(json!({
            "attendeeCount": 80,
            "dayCount": 2,
            "fbTier": "gourmet"
        })))
        .await;

        // serde rejects the unknown key before the handler runs
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_rates_returns_catalog() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/pricing/rates")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["packageTiers"].as_array().unwrap().len(), 4);
        assert_eq!(body["tentTypes"].as_array().unwrap().len(), 4);
        assert_eq!(body["fbTiers"].as_array().unwrap().len(), 3);
        assert_eq!(body["taxRules"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("ok"));
    }
}
