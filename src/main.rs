// SPDX-License-Identifier: MIT

//! Tripweaver API Server
//!
//! Backend for the travel-planning app: generates itineraries and trip
//! enrichment data with a generative-language model (with deterministic
//! fallbacks) and persists saved trips in MongoDB.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripweaver::{
    config::Config,
    db::MongoDb,
    services::{CurrencyService, ModelClient, TravelPlanner},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Tripweaver API");

    // Connect to MongoDB
    let db = MongoDb::new(&config.mongodb_uri, &config.mongodb_db)
        .await
        .expect("Failed to connect to MongoDB");

    // Model client; without a key the planner serves fallback data only
    let model = ModelClient::new(config.gemini_api_key.clone());
    if !model.is_enabled() {
        tracing::warn!("GEMINI_API_KEY not set; generation endpoints will return fallback data");
    }
    let planner = TravelPlanner::new(model);

    let currency = CurrencyService::new(config.exchange_api_url.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        planner,
        currency,
    });

    // Build router
    let app = tripweaver::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tripweaver=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
