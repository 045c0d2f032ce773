// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod enrichment;
pub mod itinerary;
pub mod trip;
pub mod user;

pub use enrichment::{
    CurrencyDescriptor, CurrencyInfo, DestinationIdea, DestinationSuggestions, ForecastDay,
    PlaceWeather, WeatherInsights,
};
pub use itinerary::{DayPlan, Itinerary, PlannedActivity};
pub use trip::{BudgetTier, Trip, TripStats};
pub use user::User;
