// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Pulse survey application.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides via the `PULSE_` prefix.
//!
//! # Usage
//!
//! ```no_run
//! use pulse_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("database: {}", config.storage.database_path);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::PulseConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// The high-level entry point: loads config from TOML files + env vars via
/// Figment, then runs post-deserialization validation. Returns either a
/// valid `PulseConfig` or the full list of diagnostic errors.
pub fn load_and_validate() -> Result<PulseConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::from(err)]),
    }
}

/// Load configuration from a specific TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<PulseConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::from(err)]),
    }
}
