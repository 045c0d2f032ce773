// SPDX-License-Identifier: MIT

//! Model-backed generation endpoints and the currency proxy.
//!
//! Generation endpoints never fail on model trouble: they return 200
//! with fallback data and `degraded: true`, leaving it to the caller
//! whether to surface the degradation.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{CurrencyInfo, DestinationIdea, Itinerary, WeatherInsights};
use crate::services::currency::Conversion;
use crate::services::{DestinationQuery, InsightsRequest, ItineraryRequest};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/travel/generate-itinerary", post(generate_itinerary))
        .route(
            "/api/travel/generate-destinations",
            post(generate_destinations),
        )
        .route("/api/travel/weather-insights", post(weather_insights))
        .route("/api/travel/currency-info", post(currency_info))
        .route("/api/travel/convert-currency", get(convert_currency))
}

// ─── Generation ──────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItineraryResponse {
    itinerary: Itinerary,
    degraded: bool,
}

/// Generate a day-by-day itinerary.
async fn generate_itinerary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let result = state.planner.generate_itinerary(&req).await;
    Ok(Json(ItineraryResponse {
        itinerary: result.data,
        degraded: result.degraded,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DestinationsResponse {
    destinations: Vec<DestinationIdea>,
    degraded: bool,
}

/// Suggest destinations for an open-ended query.
async fn generate_destinations(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DestinationQuery>,
) -> Result<Json<DestinationsResponse>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let result = state.planner.suggest_destinations(&req).await;
    Ok(Json(DestinationsResponse {
        destinations: result.data.destinations,
        degraded: result.degraded,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeatherResponse {
    insights: WeatherInsights,
    degraded: bool,
}

/// Compare weather between source and destination.
async fn weather_insights(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<WeatherResponse>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let result = state.planner.weather_insights(&req).await;
    Ok(Json(WeatherResponse {
        insights: result.data,
        degraded: result.degraded,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyInfoResponse {
    info: CurrencyInfo,
    degraded: bool,
}

/// Compare currencies between source and destination.
async fn currency_info(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<CurrencyInfoResponse>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let result = state.planner.currency_info(&req).await;
    Ok(Json(CurrencyInfoResponse {
        info: result.data,
        degraded: result.degraded,
    }))
}

// ─── Currency proxy ──────────────────────────────────────────

#[derive(Deserialize)]
struct ConvertQuery {
    amount: Option<f64>,
    from: Option<String>,
    to: Option<String>,
}

/// Convert an amount between currencies via the exchange-rate API.
async fn convert_currency(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertQuery>,
) -> Result<Json<Conversion>> {
    let amount = params
        .amount
        .ok_or_else(|| AppError::BadRequest("Missing 'amount' parameter".to_string()))?;
    let from = params
        .from
        .ok_or_else(|| AppError::BadRequest("Missing 'from' parameter".to_string()))?;
    let to = params
        .to
        .ok_or_else(|| AppError::BadRequest("Missing 'to' parameter".to_string()))?;

    let conversion = state.currency.convert(amount, &from, &to).await?;
    Ok(Json(conversion))
}
