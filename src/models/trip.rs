// SPDX-License-Identifier: MIT

//! Saved trip model for storage and API.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::enrichment::{CurrencyInfo, WeatherInsights};
use crate::models::itinerary::Itinerary;

/// A saved trip. Immutable once written; the only mutation is deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Owner (identity-provider subject id)
    #[serde(rename = "firebaseUID")]
    pub firebase_uid: String,
    /// Free-text origin place name
    pub source: String,
    /// Free-text destination place name
    pub destination: String,
    /// Day count
    pub days: u32,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    pub budget: BudgetTier,
    /// Free-text interest tags
    #[serde(default)]
    pub interests: Vec<String>,
    pub itinerary: Itinerary,
    /// Weather snapshot taken at save time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherInsights>,
    /// Currency snapshot taken at save time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyInfo>,
    /// First travel day (ISO 8601 date), used for the "upcoming" stat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// When the trip was saved (ISO 8601)
    pub created_at: String,
}

fn default_travelers() -> u32 {
    1
}

/// Budget tier selected in the planner form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

/// Aggregate counts for the dashboard.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStats {
    /// Total saved trips
    pub total: u64,
    /// Trips whose start date is in the future
    pub upcoming: u64,
    /// Distinct destinations
    pub countries: u64,
    /// Summed itinerary distance in kilometers
    pub distance: f64,
}

impl TripStats {
    /// Fold a user's trips into dashboard aggregates.
    pub fn from_trips(trips: &[Trip], now: chrono::DateTime<chrono::Utc>) -> Self {
        let mut stats = Self {
            total: trips.len() as u64,
            ..Self::default()
        };

        let mut destinations = std::collections::HashSet::new();
        for trip in trips {
            destinations.insert(trip.destination.trim().to_lowercase());
            stats.distance += trip.itinerary.distance;

            if let Some(start) = trip.start_date.as_deref().and_then(parse_start_date) {
                if start > now {
                    stats.upcoming += 1;
                }
            }
        }
        stats.countries = destinations.len() as u64;

        stats
    }
}

/// Parse a startDate value, accepting RFC3339 or a plain "YYYY-MM-DD".
fn parse_start_date(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&chrono::Utc));
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_tier_wire_names() {
        assert_eq!(serde_json::to_string(&BudgetTier::Low).unwrap(), "\"low\"");
        let tier: BudgetTier = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(tier, BudgetTier::High);
    }

    fn make_trip(destination: &str, distance: f64, start_date: Option<&str>) -> Trip {
        Trip {
            id: None,
            firebase_uid: "uid-1".to_string(),
            source: "Lisbon".to_string(),
            destination: destination.to_string(),
            days: 3,
            travelers: 1,
            budget: BudgetTier::Low,
            interests: vec![],
            itinerary: Itinerary {
                flight_time: 2.0,
                distance,
                days: vec![],
            },
            weather: None,
            currency: None,
            start_date: start_date.map(String::from),
            created_at: "2026-08-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_stats_counts_distinct_destinations_and_distance() {
        let now = chrono::Utc::now();
        let trips = vec![
            make_trip("Rome", 1800.0, None),
            make_trip("rome ", 1800.0, None),
            make_trip("Kyoto", 9700.0, None),
        ];

        let stats = TripStats::from_trips(&trips, now);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.countries, 2);
        assert!((stats.distance - 13_300.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_upcoming_uses_start_date() {
        let now = chrono::DateTime::parse_from_rfc3339("2026-08-05T00:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let trips = vec![
            make_trip("Rome", 0.0, Some("2026-12-24")),
            make_trip("Kyoto", 0.0, Some("2025-01-01T09:00:00Z")),
            make_trip("Oslo", 0.0, None),
        ];

        let stats = TripStats::from_trips(&trips, now);
        assert_eq!(stats.upcoming, 1);
    }

    #[test]
    fn test_trip_json_uses_original_field_names() {
        let trip = Trip {
            id: None,
            firebase_uid: "uid-1".to_string(),
            source: "Lisbon".to_string(),
            destination: "Rome".to_string(),
            days: 3,
            travelers: 2,
            budget: BudgetTier::Medium,
            interests: vec!["food".to_string()],
            itinerary: Itinerary {
                flight_time: 3.0,
                distance: 1860.0,
                days: vec![],
            },
            weather: None,
            currency: None,
            start_date: None,
            created_at: "2026-08-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&trip).unwrap();
        assert!(json.get("firebaseUID").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json["itinerary"].get("flightTime").is_some());
    }
}
