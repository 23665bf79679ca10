// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Pulse.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Pulse configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PulseConfig {
    /// Survey identity and logging settings.
    #[serde(default)]
    pub survey: SurveyConfig,

    /// Durable storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Gemini API settings for the analysis client.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Survey identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SurveyConfig {
    /// Display name of the survey.
    #[serde(default = "default_survey_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            name: default_survey_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_survey_name() -> String {
    "pulse".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Durable storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file holding the feedback blob.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|d| d.join("pulse/pulse.db").display().to_string())
        .unwrap_or_else(|| "pulse.db".to_string())
}

/// Gemini API configuration for the analysis request client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. Absence is a configuration error at analysis time,
    /// checked before any network attempt.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier for analysis requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL. Overridable for testing against a mock server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}
