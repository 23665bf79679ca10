// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pulse survey core.

use thiserror::Error;

/// The primary error type used across all Pulse crates.
///
/// Every failure path in the core returns one of these variants; none are
/// fatal to the process. The CLI renders each kind distinctly so users see
/// "no data to analyze" rather than a generic failure.
#[derive(Debug, Error)]
pub enum PulseError {
    /// Invalid feedback input (blank text or out-of-range mood).
    /// The store performs no write when this is returned.
    #[error("invalid feedback: {0}")]
    Validation(String),

    /// Storage backend errors (database open, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors (missing API key, invalid config values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Analysis was requested on an empty feedback collection.
    #[error("no feedback to analyze")]
    NoData,

    /// Provider-level analysis failure (transport error, non-2xx response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider returned a payload that does not match the declared
    /// analysis schema. Carries the raw payload for diagnostics.
    #[error("unexpected analysis format: {message}")]
    AnalysisFormat { message: String, raw: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
