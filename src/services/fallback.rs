// SPDX-License-Identifier: MIT

//! Deterministic-shape placeholder synthesis.
//!
//! When the model cannot be reached or its output cannot be parsed, the
//! planner substitutes these objects so downstream consumers always see
//! the full shape. Text is templated; numerics are pseudo-random within
//! documented bounds (flight time [2,12) hours, distance [500,5500) km).

use rand::Rng;

use crate::models::{
    CurrencyDescriptor, CurrencyInfo, DayPlan, DestinationIdea, DestinationSuggestions,
    ForecastDay, Itinerary, PlaceWeather, PlannedActivity, WeatherInsights,
};
use crate::services::planner::{DestinationQuery, InsightsRequest, ItineraryRequest};

const MORNING_TEMPLATES: [&str; 3] = [
    "Explore {}'s city center",
    "Visit {}'s best-known museum",
    "Take a walking tour of {}'s old town",
];

const AFTERNOON_TEMPLATES: [&str; 3] = [
    "Browse a local market in {}",
    "Relax in a park with views of {}",
    "Join a food tasting in {}",
];

const EVENING_TEMPLATES: [&str; 3] = [
    "Dinner featuring {} specialties",
    "Sunset viewpoint over {}",
    "Evening stroll through {}'s riverside",
];

fn fill(template: &str, place: &str) -> String {
    template.replacen("{}", place, 1)
}

/// Synthesize a complete itinerary for the requested day count.
pub fn itinerary(req: &ItineraryRequest) -> Itinerary {
    let mut rng = rand::rng();
    let destination = req.destination.as_str();

    let days = (1..=req.days)
        .map(|day| {
            let idx = (day as usize - 1) % MORNING_TEMPLATES.len();
            DayPlan {
                day,
                title: format!("Day {} in {}", day, destination),
                activities: vec![
                    PlannedActivity {
                        time: "Morning".to_string(),
                        description: fill(MORNING_TEMPLATES[idx], destination),
                    },
                    PlannedActivity {
                        time: "Afternoon".to_string(),
                        description: fill(AFTERNOON_TEMPLATES[idx], destination),
                    },
                    PlannedActivity {
                        time: "Evening".to_string(),
                        description: fill(EVENING_TEMPLATES[idx], destination),
                    },
                ],
                accommodation: (day < req.days)
                    .then(|| format!("Centrally located hotel in {}", destination)),
            }
        })
        .collect();

    Itinerary {
        flight_time: rng.random_range(2..12) as f64,
        distance: rng.random_range(500..5500) as f64,
        days,
    }
}

/// Synthesize destination suggestions near the query's starting point.
pub fn destinations(req: &DestinationQuery) -> DestinationSuggestions {
    let styles = [
        ("Coastal escape", 0.6),
        ("Historic city break", 0.8),
        ("Mountain retreat", 0.7),
    ];

    // Offsets keep synthetic coordinates close enough to the origin to
    // survive a max-travel-time filter
    let (lat, lng) = req
        .coordinates
        .as_ref()
        .map(|c| (c.lat, c.lng))
        .unwrap_or((0.0, 0.0));

    let destinations = styles
        .iter()
        .enumerate()
        .map(|(i, (style, cost_factor))| DestinationIdea {
            name: format!("{} near {}", style, req.location),
            country: String::new(),
            summary: format!(
                "A {} pick for a {} {}-day trip from {}",
                req.mood, req.trip_type, req.duration, req.location
            ),
            estimated_cost: (req.budget * cost_factor).round(),
            latitude: lat + (i as f64 + 1.0) * 0.5,
            longitude: lng - (i as f64 + 1.0) * 0.5,
            itinerary: (1..=req.duration.min(3))
                .map(|d| format!("Day {}: unhurried exploring and local food", d))
                .collect(),
        })
        .collect();

    DestinationSuggestions { destinations }
}

/// Synthesize a weather comparison with bounded temperatures.
pub fn weather(req: &InsightsRequest) -> WeatherInsights {
    let mut rng = rand::rng();
    let source_temp = rng.random_range(12..28) as f64;
    let dest_temp = rng.random_range(12..28) as f64;

    WeatherInsights {
        source: PlaceWeather {
            location: req.source.clone(),
            condition: "Partly cloudy".to_string(),
            temp_c: source_temp,
        },
        destination: PlaceWeather {
            location: req.destination.clone(),
            condition: "Partly cloudy".to_string(),
            temp_c: dest_temp,
        },
        forecast: ["Tomorrow", "Day 2", "Day 3"]
            .iter()
            .map(|day| ForecastDay {
                day: day.to_string(),
                condition: "Partly cloudy".to_string(),
                high_c: dest_temp + 3.0,
                low_c: dest_temp - 5.0,
            })
            .collect(),
    }
}

/// Synthesize a neutral currency comparison.
pub fn currency(_req: &InsightsRequest) -> CurrencyInfo {
    let usd = CurrencyDescriptor {
        code: "USD".to_string(),
        name: "US Dollar".to_string(),
        symbol: "$".to_string(),
    };

    CurrencyInfo {
        source_currency: usd.clone(),
        destination_currency: usd,
        exchange_rate: 1.0,
        note: Some("Live currency data unavailable; showing neutral rates".to_string()),
    }
}
