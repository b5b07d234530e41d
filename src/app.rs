// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation loop: startup health gate, then fetch/format/print cycles.
//!
//! Once the loop has been entered it is designed to never crash. Recoverable
//! fetch failures (the server answered, but unhappily) are reported inline
//! and the cycle continues; transport and decode failures abort the cycle
//! and are retried after a fixed delay. Only an interrupt breaks the loop.

use crate::config::Config;
use crate::error::ClientError;
use crate::format::{format_date, format_distance, format_duration, format_utc_rfc3339};
use crate::models::{Activity, Stats};
use crate::services::ApiClient;
use chrono::Utc;

/// How many recent activities each cycle shows.
const RECENT_LIMIT: usize = 5;

/// Run the display: health gate, then poll until interrupted.
///
/// Returns an error only if the startup health check fails; that failure is
/// fatal and the polling loop is never entered.
pub async fn run(client: &ApiClient, config: &Config) -> anyhow::Result<()> {
    tracing::info!("Testing server connection");
    if !client.health_check().await {
        tracing::error!(
            base_url = %config.api_base_url,
            "Cannot reach server; check the base URL, that the server is running, and that this host can reach it"
        );
        anyhow::bail!("server health check failed");
    }
    tracing::info!("Server connection successful");

    let mut iteration: u64 = 0;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received, shutting down");
                return Ok(());
            }
            result = run_cycle(client, config, &mut iteration) => {
                if let Err(err) = result {
                    tracing::error!(
                        error = %err,
                        retry_secs = config.error_retry.as_secs(),
                        "Cycle failed, retrying after delay"
                    );
                    tokio::time::sleep(config.error_retry).await;
                }
            }
        }
    }
}

/// One fetch/format/print cycle, ending with the interval sleep.
async fn run_cycle(
    client: &ApiClient,
    config: &Config,
    iteration: &mut u64,
) -> Result<(), ClientError> {
    *iteration += 1;
    let bar = "=".repeat(50);
    println!("\n{}", bar);
    println!("Update #{} - {}", iteration, format_utc_rfc3339(Utc::now()));
    println!("{}", bar);

    tracing::info!(iteration = *iteration, "Fetching recent activities");
    match client.recent_activities(RECENT_LIMIT).await {
        Ok(activities) => print!("{}", render_activities(&activities)),
        Err(err @ (ClientError::Transport(_) | ClientError::Decode(_))) => return Err(err),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch activities");
            println!("Failed to fetch activities");
        }
    }

    tracing::info!("Fetching stats");
    match client.stats().await {
        Ok(stats) => print!("{}", render_stats(&stats)),
        Err(err @ (ClientError::Transport(_) | ClientError::Decode(_))) => return Err(err),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch stats");
            println!("Failed to fetch stats");
        }
    }

    // Cycle heartbeat, standing in for the firmware build's free-memory
    // report; diagnostic only.
    tracing::debug!(iteration = *iteration, "Cycle complete");

    tracing::info!(
        secs = config.refresh_interval.as_secs(),
        "Next update scheduled"
    );
    tokio::time::sleep(config.refresh_interval).await;
    Ok(())
}

/// Render the recent-activities block.
///
/// An empty fetch result is reported with the same failure message as a
/// failed fetch; the loop does not distinguish the two.
pub fn render_activities(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return "Failed to fetch activities\n".to_string();
    }

    let bar = "=".repeat(50);
    let mut out = format!("\n{}\nRECENT ACTIVITIES\n{}\n", bar, bar);
    for (i, activity) in activities.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, activity.name));
        out.push_str(&format!(
            "   Type: {} | Date: {}\n",
            activity.sport_type,
            format_date(&activity.start_date)
        ));
        out.push_str(&format!(
            "   Distance: {} km | Duration: {}\n\n",
            format_distance(activity.distance_meters),
            format_duration(activity.moving_time_secs)
        ));
    }
    out
}

/// Render the aggregate-stats block.
pub fn render_stats(stats: &Stats) -> String {
    let bar = "=".repeat(50);
    format!(
        "\n{}\nYOUR STATS\n{}\nTotal Activities: {}\nTotal Distance: {} km\nTotal Time: {}\n{}\n",
        bar,
        bar,
        stats.total_activities,
        format_distance(stats.total_distance_meters),
        format_duration(stats.total_time_secs),
        bar
    )
}
