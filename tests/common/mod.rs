// SPDX-License-Identifier: MIT

use std::sync::Arc;
use tripweaver::config::Config;
use tripweaver::db::MongoDb;
use tripweaver::routes::create_router;
use tripweaver::services::{CurrencyService, ModelClient, TravelPlanner};
use tripweaver::AppState;

/// Create a test app with offline mock dependencies.
///
/// The database is in offline mode (every operation errors), the model
/// client has no API key (every generation serves fallback data), and
/// the currency service uses its static rate table.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = MongoDb::new_mock();
    let planner = TravelPlanner::new(ModelClient::new_disabled());
    let currency = CurrencyService::new_mock();

    let state = Arc::new(AppState {
        config,
        db,
        planner,
        currency,
    });

    (create_router(state.clone()), state)
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&body).expect("body should be JSON")
}
