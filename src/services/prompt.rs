// SPDX-License-Identifier: MIT

//! Prompt construction for the generative model.
//!
//! Pure string formatting: inputs are interpolated as-is, and every
//! prompt ends with a strict output-shape example because the sanitizer
//! and parser depend on the model answering with a single JSON object.

use crate::services::planner::{DestinationQuery, InsightsRequest, ItineraryRequest};

/// Shared suffix that pins the model to bare JSON output.
const JSON_ONLY: &str =
    "Respond with ONLY the JSON object, no markdown fences, no prose before or after it.";

pub(crate) fn itinerary_prompt(req: &ItineraryRequest) -> String {
    let interests = if req.interests.is_empty() {
        "general sightseeing".to_string()
    } else {
        req.interests.join(", ")
    };

    format!(
        r#"Plan a {days}-day trip from {source} to {destination} for {travelers} traveler(s) on a {budget:?} budget. Interests: {interests}.

Return a JSON object exactly matching this shape:
{{
  "flightTime": 4,
  "distance": 1860,
  "days": [
    {{
      "day": 1,
      "title": "Arrival and old town",
      "activities": [
        {{"time": "Morning", "description": "..."}},
        {{"time": "Afternoon", "description": "..."}},
        {{"time": "Evening", "description": "..."}}
      ],
      "accommodation": "..."
    }}
  ]
}}

"days" must contain exactly {days} entries. {json_only}"#,
        days = req.days,
        source = req.source,
        destination = req.destination,
        travelers = req.travelers.unwrap_or(1),
        budget = req.budget,
        interests = interests,
        json_only = JSON_ONLY,
    )
}

pub(crate) fn destinations_prompt(req: &DestinationQuery) -> String {
    let max_travel = req
        .max_travel_time
        .map(|h| format!(" Reachable within {h} hours of flying."))
        .unwrap_or_default();

    format!(
        r#"Suggest 3 travel destinations for someone starting from {location}, with a total budget of {budget:.0}, staying {duration} days. Mood: {mood}. Preferred weather: {weather}. Trip type: {trip_type}.{max_travel}

Return a JSON object exactly matching this shape:
{{
  "destinations": [
    {{
      "name": "...",
      "country": "...",
      "summary": "...",
      "estimatedCost": 1200,
      "latitude": 41.9,
      "longitude": 12.5,
      "itinerary": ["Day 1: ...", "Day 2: ..."]
    }}
  ]
}}

{json_only}"#,
        location = req.location,
        budget = req.budget,
        duration = req.duration,
        mood = req.mood,
        weather = req.weather,
        trip_type = req.trip_type,
        max_travel = max_travel,
        json_only = JSON_ONLY,
    )
}

pub(crate) fn weather_prompt(req: &InsightsRequest) -> String {
    format!(
        r#"Compare typical current weather in {source} and {destination}, and give a 3-day outlook for {destination}.

Return a JSON object exactly matching this shape:
{{
  "source": {{"location": "{source}", "condition": "...", "tempC": 21}},
  "destination": {{"location": "{destination}", "condition": "...", "tempC": 27}},
  "forecast": [
    {{"day": "Tomorrow", "condition": "...", "highC": 28, "lowC": 19}}
  ]
}}

{json_only}"#,
        source = req.source,
        destination = req.destination,
        json_only = JSON_ONLY,
    )
}

pub(crate) fn currency_prompt(req: &InsightsRequest) -> String {
    format!(
        r#"Identify the local currencies of {source} and {destination} and the approximate exchange rate between them.

Return a JSON object exactly matching this shape:
{{
  "sourceCurrency": {{"code": "EUR", "name": "Euro", "symbol": "€"}},
  "destinationCurrency": {{"code": "JPY", "name": "Japanese Yen", "symbol": "¥"}},
  "exchangeRate": 163.2,
  "note": "..."
}}

"exchangeRate" is units of destination currency per unit of source currency. {json_only}"#,
        source = req.source,
        destination = req.destination,
        json_only = JSON_ONLY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetTier;

    #[test]
    fn test_itinerary_prompt_embeds_parameters() {
        let req = ItineraryRequest {
            source: "Lisbon".to_string(),
            destination: "Rome".to_string(),
            days: 4,
            travelers: Some(2),
            budget: BudgetTier::Medium,
            interests: vec!["food".to_string(), "history".to_string()],
            source_coordinates: None,
            destination_coordinates: None,
        };

        let prompt = itinerary_prompt(&req);
        assert!(prompt.contains("4-day trip from Lisbon to Rome"));
        assert!(prompt.contains("food, history"));
        assert!(prompt.contains("\"flightTime\""));
        assert!(prompt.contains("exactly 4 entries"));
    }

    #[test]
    fn test_destinations_prompt_mentions_travel_limit_only_when_set() {
        let mut req = DestinationQuery {
            location: "Berlin".to_string(),
            budget: 1500.0,
            duration: 5,
            mood: "relaxed".to_string(),
            weather: "warm".to_string(),
            trip_type: "beach".to_string(),
            max_travel_time: None,
            coordinates: None,
        };

        assert!(!destinations_prompt(&req).contains("hours of flying"));
        req.max_travel_time = Some(3.0);
        assert!(destinations_prompt(&req).contains("3 hours of flying"));
    }
}
