// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core types, error definitions, and the metrics engine for Pulse.
//!
//! This crate holds everything shared across the Pulse workspace: the
//! feedback data model, the error taxonomy, and the pure mood-aggregation
//! logic. It has no I/O and no async surface.

pub mod error;
pub mod metrics;
pub mod types;

pub use error::PulseError;
pub use metrics::MoodMetrics;
pub use types::{AnalysisResult, FeedbackEntry, Mood};
