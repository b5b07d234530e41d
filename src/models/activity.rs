// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity record returned by the recent-activities endpoint.

use serde::{Deserialize, Serialize};

/// A single recorded exercise session.
///
/// The server's schema is authoritative and may carry more fields than the
/// display needs; extras are ignored. Fields the display does read are
/// decoded here with explicit defaults ("Unknown" for text, 0 for numerics,
/// "" for the start date) so the formatting layer never sees missing values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name/title
    #[serde(default = "unknown")]
    pub name: String,
    /// Sport type (Ride, Run, Hike, etc.)
    #[serde(rename = "type", default = "unknown")]
    pub sport_type: String,
    /// Distance in meters
    #[serde(rename = "distance", default)]
    pub distance_meters: f64,
    /// Moving time in seconds
    #[serde(rename = "moving_time", default)]
    pub moving_time_secs: u64,
    /// Start date/time (ISO 8601)
    #[serde(default)]
    pub start_date: String,
}

fn unknown() -> String {
    "Unknown".to_string()
}
