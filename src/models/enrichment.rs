// SPDX-License-Identifier: MIT

//! Enrichment shapes: destination suggestions, weather insights and
//! currency comparisons produced by the model (or fallback synthesis).

use serde::{Deserialize, Serialize};

/// Destination suggestions for an open-ended "where should I go" query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSuggestions {
    pub destinations: Vec<DestinationIdea>,
}

/// One suggested destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationIdea {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub summary: String,
    /// Estimated total cost for the stay, in the caller's budget currency
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    /// Short day-by-day hints
    #[serde(default)]
    pub itinerary: Vec<String>,
}

/// Weather comparison between source and destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherInsights {
    pub source: PlaceWeather,
    pub destination: PlaceWeather,
    /// Forecast for the destination
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

/// Current conditions at one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceWeather {
    pub location: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub temp_c: f64,
}

/// One forecast day for the destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub day: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub high_c: f64,
    #[serde(default)]
    pub low_c: f64,
}

/// Currency comparison between source and destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub source_currency: CurrencyDescriptor,
    pub destination_currency: CurrencyDescriptor,
    /// Units of destination currency per unit of source currency
    #[serde(default)]
    pub exchange_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A currency as shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDescriptor {
    /// ISO 4217 code, e.g. "EUR"
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}
