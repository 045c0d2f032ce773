// SPDX-License-Identifier: MIT

//! Itinerary shapes shared by the planner output and stored trips.
//!
//! Field names match the JSON the model is instructed to emit, so the
//! same types deserialize model output and MongoDB documents.

use serde::{Deserialize, Serialize};

/// Day-by-day trip plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Estimated flight time in hours
    #[serde(default)]
    pub flight_time: f64,
    /// Point-to-point distance in kilometers
    #[serde(default)]
    pub distance: f64,
    /// Ordered day plans
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    /// Post-parse shape check: syntactically valid JSON with the wrong
    /// structure is treated the same as a parse failure.
    pub fn check_shape(&self, expected_days: u32) -> Result<(), String> {
        if self.days.is_empty() {
            return Err("itinerary has no days".to_string());
        }
        if self.days.len() != expected_days as usize {
            return Err(format!(
                "itinerary has {} days, expected {}",
                self.days.len(),
                expected_days
            ));
        }
        if self.days.iter().any(|d| d.activities.is_empty()) {
            return Err("itinerary has a day with no activities".to_string());
        }
        Ok(())
    }
}

/// One day of the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-indexed day number
    pub day: u32,
    #[serde(default)]
    pub title: String,
    /// Ordered activities for the day
    pub activities: Vec<PlannedActivity>,
    /// Suggested accommodation for the night, absent on the last day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,
}

/// A single activity within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedActivity {
    /// Rough slot, e.g. "Morning"
    #[serde(default)]
    pub time: String,
    pub description: String,
}
