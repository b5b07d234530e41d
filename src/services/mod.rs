// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - network bring-up and the server API client.

pub mod api;
pub mod network;

pub use api::ApiClient;
pub use network::{bring_up, Station, TcpProbeStation};
