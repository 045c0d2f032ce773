// SPDX-License-Identifier: MIT

//! Tripweaver: AI-assisted travel planning backend
//!
//! This crate provides the backend API for generating trip itineraries
//! from a generative-language model and persisting saved trips.

pub mod config;
pub mod db;
pub mod error;
pub mod geo;
pub mod model_json;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MongoDb;
use services::{CurrencyService, TravelPlanner};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MongoDb,
    pub planner: TravelPlanner,
    pub currency: CurrencyService,
}
