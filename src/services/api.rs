// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the activity aggregation server.
//!
//! Wraps the four GET endpoints the display uses:
//! - health probe (startup gate)
//! - recent activities
//! - aggregate stats
//! - calendar by month
//!
//! All calls are synchronous from the caller's point of view (awaited in
//! sequence) and carry a fixed per-call timeout.

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::models::{Activity, Stats};
use reqwest::StatusCode;
use std::time::Duration;

/// Per-request timeout for the health probe.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
/// Per-request timeout for data calls.
const DATA_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the activity server's read API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    user_id: u64,
}

impl ApiClient {
    /// Create a client bound to the configured server and user.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            user_id: config.user_id,
        }
    }

    /// Probe the server's liveness endpoint.
    ///
    /// Sends no custom headers. Reachable means status 200 exactly; any
    /// transport error or other status counts as unreachable.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        tracing::debug!(url = %url, "Checking server health");

        match self.http.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(err) => {
                tracing::warn!(error = %err, "Health check failed");
                false
            }
        }
    }

    /// Fetch the user's most recent activities, keeping at most `limit`.
    ///
    /// The server returns its full recent window; the cut to `limit` is a
    /// client-side slice, order preserved. An empty response body means no
    /// activities, not a decode failure.
    pub async fn recent_activities(&self, limit: usize) -> Result<Vec<Activity>> {
        let url = format!("{}/api/activities/recent/{}", self.base_url, self.user_id);
        let response = check_status(self.get_data(&url).await?, true)?;

        let body = response.text().await.map_err(ClientError::from)?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut activities: Vec<Activity> =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        activities.truncate(limit);
        Ok(activities)
    }

    /// Fetch the user's aggregate statistics.
    pub async fn stats(&self) -> Result<Stats> {
        let url = format!("{}/api/stats/{}", self.base_url, self.user_id);
        let response = check_status(self.get_data(&url).await?, false)?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetch calendar data for a specific month.
    ///
    /// The calendar schema is server-defined and not inspected here, so the
    /// payload is returned as raw JSON.
    pub async fn calendar(&self, year: i32, month: u32) -> Result<serde_json::Value> {
        let url = format!(
            "{}/api/activities/calendar/{}/{}/{}",
            self.base_url, self.user_id, year, month
        );
        let response = check_status(self.get_data(&url).await?, false)?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Issue a data GET with the API key and content-type headers attached.
    async fn get_data(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!(url = %url, "Fetching");

        self.http
            .get(url)
            .header("X-API-Key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(DATA_TIMEOUT)
            .send()
            .await
            .map_err(ClientError::from)
    }
}

/// Map a non-200 response to the error taxonomy.
///
/// Only the recent-activities endpoint distinguishes 401; the other data
/// endpoints report every unexpected status uniformly.
fn check_status(response: reqwest::Response, distinguish_auth: bool) -> Result<reqwest::Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    if distinguish_auth && status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::InvalidApiKey);
    }

    Err(ClientError::ServerStatus(status.as_u16()))
}
