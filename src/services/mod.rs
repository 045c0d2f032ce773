// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod currency;
pub mod fallback;
pub mod genai;
pub mod planner;
pub mod prompt;

pub use currency::{Conversion, CurrencyService};
pub use genai::ModelClient;
pub use planner::{Coordinates, DestinationQuery, InsightsRequest, ItineraryRequest, TravelPlanner};
