// SPDX-License-Identifier: MIT

//! Saved-trip CRUD with ownership checks.
//!
//! There is deliberately no update endpoint: trips are immutable once
//! saved, and the only mutation is an ownership-checked delete.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{BudgetTier, CurrencyInfo, Itinerary, Trip, TripStats, WeatherInsights};
use crate::time_utils;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/trips", post(save_trip))
        .route("/api/trips/user/{firebase_uid}", get(list_trips))
        .route("/api/trips/stats/{firebase_uid}", get(trip_stats))
        .route("/api/trips/{trip_id}", get(get_trip).delete(delete_trip))
}

// ─── Save ────────────────────────────────────────────────────

/// Full trip payload from the "save trip" action.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct SaveTripRequest {
    #[serde(rename = "firebaseUID", default)]
    firebase_uid: String,
    #[validate(length(min = 1, max = 100))]
    source: String,
    #[validate(length(min = 1, max = 100))]
    destination: String,
    #[validate(range(min = 1, max = 30))]
    days: u32,
    #[serde(default)]
    travelers: Option<u32>,
    budget: BudgetTier,
    #[serde(default)]
    interests: Vec<String>,
    itinerary: Itinerary,
    #[serde(default)]
    weather: Option<WeatherInsights>,
    #[serde(default)]
    currency: Option<CurrencyInfo>,
    #[serde(default)]
    start_date: Option<String>,
}

/// Save a generated trip.
async fn save_trip(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveTripRequest>,
) -> Result<(StatusCode, Json<Trip>)> {
    // Ownership is established at save time; without it nothing is written
    if req.firebase_uid.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let trip = Trip {
        id: None,
        firebase_uid: req.firebase_uid,
        source: req.source,
        destination: req.destination,
        days: req.days,
        travelers: req.travelers.unwrap_or(1),
        budget: req.budget,
        interests: req.interests,
        itinerary: req.itinerary,
        weather: req.weather,
        currency: req.currency,
        start_date: req.start_date,
        created_at: time_utils::now_rfc3339(),
    };

    let saved = state.db.insert_trip(trip).await?;
    tracing::info!(
        firebase_uid = %saved.firebase_uid,
        destination = %saved.destination,
        "Trip saved"
    );

    Ok((StatusCode::CREATED, Json(saved)))
}

// ─── List / Stats ────────────────────────────────────────────

/// Get all of a user's trips, newest first.
async fn list_trips(
    State(state): State<Arc<AppState>>,
    Path(firebase_uid): Path<String>,
) -> Result<Json<Vec<Trip>>> {
    let trips = state.db.get_trips_for_user(&firebase_uid).await?;
    Ok(Json(trips))
}

/// Dashboard aggregates for a user.
async fn trip_stats(
    State(state): State<Arc<AppState>>,
    Path(firebase_uid): Path<String>,
) -> Result<Json<TripStats>> {
    let stats = state.db.trip_stats(&firebase_uid).await?;
    Ok(Json(stats))
}

// ─── Read / Delete ───────────────────────────────────────────

#[derive(Deserialize)]
struct OwnerQuery {
    #[serde(rename = "firebaseUID", default)]
    firebase_uid: Option<String>,
}

/// Get a single trip, only for its owner.
async fn get_trip(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<String>,
    Query(params): Query<OwnerQuery>,
) -> Result<Json<Trip>> {
    let firebase_uid = require_uid(params.firebase_uid.as_deref())?;
    let trip_id = parse_trip_id(&trip_id)?;

    state
        .db
        .get_trip_for_owner(trip_id, firebase_uid)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))
}

#[derive(Deserialize)]
struct DeleteTripRequest {
    #[serde(rename = "firebaseUID", default)]
    firebase_uid: Option<String>,
}

#[derive(Serialize)]
struct DeleteTripResponse {
    success: bool,
    message: String,
}

/// Delete a trip, only for its owner.
///
/// A valid trip id with the wrong owner is indistinguishable from a
/// missing trip: both are 404, so the endpoint does not leak existence.
async fn delete_trip(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<String>,
    Json(req): Json<DeleteTripRequest>,
) -> Result<Json<DeleteTripResponse>> {
    let firebase_uid = require_uid(req.firebase_uid.as_deref())?;
    let trip_oid = parse_trip_id(&trip_id)?;

    let deleted = state.db.delete_trip(trip_oid, firebase_uid).await?;
    if !deleted {
        return Err(AppError::NotFound("Trip not found".to_string()));
    }

    tracing::info!(firebase_uid, trip_id = %trip_id, "Trip deleted");
    Ok(Json(DeleteTripResponse {
        success: true,
        message: "Trip deleted".to_string(),
    }))
}

// ─── Helpers ─────────────────────────────────────────────────

fn require_uid(raw: Option<&str>) -> Result<&str> {
    match raw {
        Some(uid) if !uid.trim().is_empty() => Ok(uid),
        _ => Err(AppError::Unauthorized),
    }
}

fn parse_trip_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("Invalid trip id: {raw}")))
}
