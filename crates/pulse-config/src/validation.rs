// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and known logging levels.

use crate::diagnostic::ConfigError;
use crate::model::PulseConfig;

/// Logging levels accepted by `survey.log_level`.
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PulseConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if !VALID_LOG_LEVELS.contains(&config.survey.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "survey.log_level `{}` is not one of: {}",
                config.survey.log_level,
                VALID_LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }

    if config.gemini.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.base_url must not be empty".to_string(),
        });
    }

    if let Some(key) = &config.gemini.api_key
        && key.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "gemini.api_key is set but empty; unset it or provide a key".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
