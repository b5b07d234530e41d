//! Aggregate statistics returned by the stats endpoint.

use serde::{Deserialize, Serialize};

/// Pre-computed totals across all of a user's activities.
///
/// Same defaulting policy as [`crate::models::Activity`]: a partial response
/// decodes with zeroed totals rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Total activities recorded
    #[serde(default)]
    pub total_activities: u64,
    /// Total distance across all activities (meters)
    #[serde(rename = "total_distance", default)]
    pub total_distance_meters: f64,
    /// Total moving time across all activities (seconds)
    #[serde(rename = "total_time", default)]
    pub total_time_secs: u64,
}
