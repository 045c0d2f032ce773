// SPDX-License-Identifier: MIT

//! Trip planning orchestration.
//!
//! Every generation flow runs the same pipeline: build prompt, call the
//! model, sanitize and strictly parse the output, shape-check the parsed
//! value, and substitute fallback synthesis on any failure. The result
//! always has the expected shape; `ModelData::degraded` records whether
//! it came from the model or the fallback generator.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::Validate;

use crate::geo;
use crate::model_json::{parse_model_json, ModelData};
use crate::models::{BudgetTier, CurrencyInfo, DestinationSuggestions, Itinerary, WeatherInsights};
use crate::services::genai::ModelClient;
use crate::services::{fallback, prompt};

/// (lat, lng) pair as sent by map frontends.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Inputs for itinerary generation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    #[validate(length(min = 1, max = 100))]
    pub source: String,
    #[validate(length(min = 1, max = 100))]
    pub destination: String,
    #[validate(range(min = 1, max = 30))]
    pub days: u32,
    #[serde(default)]
    pub travelers: Option<u32>,
    pub budget: BudgetTier,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub source_coordinates: Option<Coordinates>,
    #[serde(default)]
    pub destination_coordinates: Option<Coordinates>,
}

/// Inputs for destination suggestions.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DestinationQuery {
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[validate(range(min = 1.0))]
    pub budget: f64,
    #[validate(range(min = 1, max = 30))]
    pub duration: u32,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub trip_type: String,
    /// Maximum acceptable flight time in hours
    #[serde(default)]
    pub max_travel_time: Option<f64>,
    /// Origin coordinates, used to estimate flight times
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// Inputs for weather/currency comparisons.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    #[validate(length(min = 1, max = 100))]
    pub source: String,
    #[validate(length(min = 1, max = 100))]
    pub destination: String,
}

/// Orchestrates model-backed generation with fallback synthesis.
#[derive(Clone)]
pub struct TravelPlanner {
    model: ModelClient,
}

impl TravelPlanner {
    pub fn new(model: ModelClient) -> Self {
        Self { model }
    }

    /// Whether real model output is possible (an API key is configured).
    pub fn model_enabled(&self) -> bool {
        self.model.is_enabled()
    }

    /// Call the model and parse its output; None means "use fallback".
    async fn fetch<T: DeserializeOwned>(&self, prompt: &str, what: &'static str) -> Option<T> {
        let raw = match self.model.generate(prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(what, error = %e, "Model call failed, substituting fallback data");
                return None;
            }
        };

        match parse_model_json::<T>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    what,
                    error = %e,
                    candidate = %snippet(&e.candidate),
                    "Model output unparseable, substituting fallback data"
                );
                None
            }
        }
    }

    /// Generate a day-by-day itinerary.
    ///
    /// When both coordinate pairs are present, distance and flight time
    /// are computed by haversine instead of trusting the model's guess.
    pub async fn generate_itinerary(&self, req: &ItineraryRequest) -> ModelData<Itinerary> {
        let prompt = prompt::itinerary_prompt(req);
        let mut result = match self.fetch::<Itinerary>(&prompt, "itinerary").await {
            Some(itinerary) => match itinerary.check_shape(req.days) {
                Ok(()) => ModelData::fresh(itinerary),
                Err(reason) => {
                    tracing::warn!(reason, "Model itinerary failed shape check");
                    ModelData::fallback(fallback::itinerary(req))
                }
            },
            None => ModelData::fallback(fallback::itinerary(req)),
        };

        if let (Some(src), Some(dst)) = (req.source_coordinates, req.destination_coordinates) {
            let km = geo::haversine_km(src.as_tuple(), dst.as_tuple());
            result.data.distance = km.round();
            result.data.flight_time = (geo::flight_hours(km) * 10.0).round() / 10.0;
        }

        result
    }

    /// Suggest destinations, filtered by the caller's travel-time limit.
    pub async fn suggest_destinations(
        &self,
        req: &DestinationQuery,
    ) -> ModelData<DestinationSuggestions> {
        let prompt = prompt::destinations_prompt(req);
        let mut result = match self.fetch::<DestinationSuggestions>(&prompt, "destinations").await {
            Some(s) if !s.destinations.is_empty() => ModelData::fresh(s),
            Some(_) => {
                tracing::warn!("Model returned an empty destination list");
                ModelData::fallback(fallback::destinations(req))
            }
            None => ModelData::fallback(fallback::destinations(req)),
        };

        if let (Some(max_hours), Some(origin)) = (req.max_travel_time, req.coordinates) {
            result.data.destinations.retain(|idea| {
                if idea.latitude == 0.0 && idea.longitude == 0.0 {
                    // No coordinates to estimate from
                    return true;
                }
                let km = geo::haversine_km(origin.as_tuple(), (idea.latitude, idea.longitude));
                geo::flight_hours(km) <= max_hours
            });

            if result.data.destinations.is_empty() {
                tracing::warn!(max_hours, "All suggestions exceeded the travel-time limit");
                result = ModelData::fallback(fallback::destinations(req));
            }
        }

        result
    }

    /// Compare weather between source and destination.
    pub async fn weather_insights(&self, req: &InsightsRequest) -> ModelData<WeatherInsights> {
        let prompt = prompt::weather_prompt(req);
        match self.fetch::<WeatherInsights>(&prompt, "weather").await {
            Some(insights)
                if !insights.source.location.is_empty()
                    && !insights.destination.location.is_empty() =>
            {
                ModelData::fresh(insights)
            }
            Some(_) => {
                tracing::warn!("Model weather insights failed shape check");
                ModelData::fallback(fallback::weather(req))
            }
            None => ModelData::fallback(fallback::weather(req)),
        }
    }

    /// Compare currencies between source and destination.
    pub async fn currency_info(&self, req: &InsightsRequest) -> ModelData<CurrencyInfo> {
        let prompt = prompt::currency_prompt(req);
        match self.fetch::<CurrencyInfo>(&prompt, "currency").await {
            Some(info)
                if !info.source_currency.code.is_empty()
                    && !info.destination_currency.code.is_empty()
                    && info.exchange_rate > 0.0 =>
            {
                ModelData::fresh(info)
            }
            Some(_) => {
                tracing::warn!("Model currency info failed shape check");
                ModelData::fallback(fallback::currency(req))
            }
            None => ModelData::fallback(fallback::currency(req)),
        }
    }
}

/// Short prefix of a candidate string for log lines.
fn snippet(s: &str) -> String {
    const MAX: usize = 120;
    if s.len() <= MAX {
        s.to_string()
    } else {
        let cut = s
            .char_indices()
            .take_while(|(i, _)| *i < MAX)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}…", &s[..cut])
    }
}
