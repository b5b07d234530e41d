// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error taxonomy.
//!
//! No error is ever propagated out of the client layer as a panic: every
//! transport or protocol failure is mapped into one of these variants, and
//! the presentation loop decides how to recover.

/// Failures the client layer can report.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure: timeout, unreachable host, refused
    /// connection, or a broken response stream.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server rejected the pre-shared API key (HTTP 401).
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The server answered with an unexpected status code.
    #[error("Server returned {0}")]
    ServerStatus(u16),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
