// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava console client: polls an activity aggregation server for one
//! user's recent activities and aggregate stats, and prints formatted
//! summaries to the console on a fixed interval.

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
