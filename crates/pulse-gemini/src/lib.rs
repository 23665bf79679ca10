// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini analysis request client for Pulse.
//!
//! Builds a deterministic prompt from a feedback snapshot, issues a single
//! `generateContent` request with a structured-output schema, and validates
//! the response into a typed [`pulse_core::AnalysisResult`]. Provider
//! failures, schema violations, and the no-data case are surfaced as
//! distinct error kinds.

pub mod client;
pub mod prompt;
pub mod schema;
pub mod types;

pub use client::GeminiClient;
