// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure formatting helpers for the console display.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a distance in meters as kilometers with two decimal places.
///
/// No unit suffix is appended here; callers add "km" where they want it.
pub fn format_distance(meters: f64) -> String {
    format!("{:.2}", meters / 1000.0)
}

/// Format a duration in whole seconds as `"{hours}h {minutes}m"`.
///
/// Truncating division only; hours keep counting past 24, there is no day
/// component.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// The `YYYY-MM-DD` prefix of an ISO 8601 date string.
///
/// Shorter input degrades to whatever prefix exists.
pub fn format_date(start_date: &str) -> &str {
    let end = start_date
        .char_indices()
        .nth(10)
        .map(|(i, _)| i)
        .unwrap_or(start_date.len());
    &start_date[..end]
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
