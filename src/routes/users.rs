// SPDX-License-Identifier: MIT

//! User login upserts and profile reads.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::time_utils;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/auth", post(auth_user))
        .route("/api/users/profile/{firebase_uid}", get(get_profile))
}

/// Login/registration event from the identity provider.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct AuthRequest {
    #[validate(length(min = 1, max = 100))]
    name: String,
    #[validate(email)]
    email: String,
    #[serde(rename = "firebaseUID", default)]
    #[validate(length(min = 1, max = 200))]
    firebase_uid: String,
    #[serde(default)]
    profile_pic: Option<String>,
}

/// Upsert a user on every login event.
async fn auth_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<User>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let now = time_utils::now_rfc3339();
    let user = User {
        firebase_uid: req.firebase_uid,
        email: req.email,
        name: req.name,
        profile_pic: req.profile_pic,
        last_login: now.clone(),
        created_at: now,
    };

    let saved = state.db.upsert_user(&user).await?;
    tracing::info!(firebase_uid = %saved.firebase_uid, "User login upsert");

    Ok(Json(saved))
}

/// Get a user profile by identity-provider subject id.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(firebase_uid): Path<String>,
) -> Result<Json<User>> {
    state
        .db
        .get_user(&firebase_uid)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", firebase_uid)))
}
