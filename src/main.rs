// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava Console Client
//!
//! Connects to the network, checks that the activity server is reachable,
//! then polls it for recent activities and aggregate stats, printing
//! formatted summaries on a fixed interval.

use strava_console::{
    app,
    config::Config,
    services::{network, ApiClient, TcpProbeStation},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        base_url = %config.api_base_url,
        user_id = config.user_id,
        "Starting Strava activity display"
    );

    // Bring the network up before first contact with the server
    let mut station = TcpProbeStation::new(&config.api_base_url)?;
    if !network::bring_up(&mut station, &config).await {
        anyhow::bail!("network bring-up failed");
    }

    let client = ApiClient::new(&config);
    app::run(&client, &config).await
}

/// Initialize console logging with env-filter overrides.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_console=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
