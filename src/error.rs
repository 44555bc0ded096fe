//! # Error Types
//!
//! Centralized error definitions. All errors implement `std::error::Error`
//! and `std::fmt::Display`.

use thiserror::Error;

/// Errors surfaced by the remote API client.
///
/// Every client operation returns one of these instead of a null-like
/// sentinel, so callers pattern-match on the failure kind. Each variant
/// names the operation for diagnostics.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{op} request failed: {source}")]
    Transport {
        op: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{op} returned HTTP {status}")]
    Status { op: &'static str, status: u16 },

    #[error("invalid {op} response: {reason}")]
    InvalidResponse { op: &'static str, reason: String },
}

/// Configuration and input-file errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error reading {path}: {msg}")]
    IoError { path: String, msg: String },
}
