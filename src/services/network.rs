// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Network bring-up: wait for the link before first contact with the server.
//!
//! The bring-up policy is fixed: short-circuit if the link is already up,
//! otherwise start association and poll every 500 ms up to a 15 s ceiling.
//! A failed bring-up is reported as `false`, never raised.

use crate::config::Config;
use crate::error::ClientError;
use std::net::{IpAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// How often the link is polled while waiting for association.
const POLL_INTERVAL: Duration = Duration::from_millis(500);
/// Ceiling on the whole bring-up attempt.
const BRING_UP_TIMEOUT: Duration = Duration::from_secs(15);
/// Timeout for a single TCP reachability probe.
const PROBE_TIMEOUT: Duration = Duration::from_millis(400);

/// A network station the client can wait on.
pub trait Station {
    /// Begin associating with the given credentials. Called at most once per
    /// bring-up attempt.
    fn start(&mut self, ssid: &str, password: &str);

    /// Whether the link is currently up.
    fn is_connected(&mut self) -> bool;

    /// Local address of the interface, once associated.
    fn local_addr(&self) -> Option<IpAddr>;
}

/// Wait for the station to come up.
///
/// If the link is already up, returns `true` without reconnecting. Otherwise
/// starts association and polls until the ceiling; on timeout returns
/// `false` so the caller decides whether to proceed. One attempt only, no
/// backoff.
pub async fn bring_up<S: Station>(station: &mut S, config: &Config) -> bool {
    if station.is_connected() {
        tracing::info!(addr = ?station.local_addr(), "Network already up");
        return true;
    }

    tracing::info!(ssid = %config.wifi_ssid, "Connecting to network");
    station.start(&config.wifi_ssid, &config.wifi_password);

    let deadline = tokio::time::Instant::now() + BRING_UP_TIMEOUT;
    loop {
        if station.is_connected() {
            tracing::info!(addr = ?station.local_addr(), "Network up");
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            tracing::error!("Network bring-up timed out, check SSID and password");
            return false;
        }
        tracing::debug!("Waiting for association");
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Station backed by the host network stack.
///
/// The operating system owns radio association, so the credentials only name
/// the network the host should already be joined to; link state is probed
/// with a short TCP connect to the configured server's address.
pub struct TcpProbeStation {
    target: String,
    local_addr: Option<IpAddr>,
}

impl TcpProbeStation {
    /// Build a probe station targeting the server named in `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let url = reqwest::Url::parse(base_url)
            .map_err(|e| ClientError::Transport(format!("Invalid base URL: {}", e)))?;
        let host = url
            .host_str()
            .ok_or_else(|| ClientError::Transport("Base URL has no host".to_string()))?;
        let port = url.port_or_known_default().unwrap_or(80);

        Ok(Self {
            target: format!("{}:{}", host, port),
            local_addr: None,
        })
    }
}

impl Station for TcpProbeStation {
    fn start(&mut self, _ssid: &str, _password: &str) {
        // Association is delegated to the OS; nothing to kick off here.
    }

    fn is_connected(&mut self) -> bool {
        let Ok(mut addrs) = self.target.to_socket_addrs() else {
            return false;
        };
        let Some(addr) = addrs.next() else {
            return false;
        };

        match TcpStream::connect_timeout(&addr, PROBE_TIMEOUT) {
            Ok(stream) => {
                self.local_addr = stream.local_addr().ok().map(|a| a.ip());
                true
            }
            Err(_) => false,
        }
    }

    fn local_addr(&self) -> Option<IpAddr> {
        self.local_addr
    }
}
