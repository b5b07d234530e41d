// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for integration tests: in-process stub servers and test
//! configuration.

use axum::Router;
use strava_console::config::Config;

/// Serve a router on an ephemeral localhost port, returning its base URL.
///
/// The server task runs until the test process exits; tests are short-lived
/// so no explicit shutdown is needed.
#[allow(dead_code)]
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    format!("http://{}", addr)
}

/// Test config pointed at a stub server.
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        ..Config::test_default()
    }
}

/// A base URL that refuses connections: bind a listener, note the port,
/// drop it.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway addr");
    drop(listener);

    format!("http://{}", addr)
}
