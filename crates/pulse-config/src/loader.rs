// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pulse.toml` > `~/.config/pulse/pulse.toml` >
//! `/etc/pulse/pulse.toml` with environment variable overrides via the
//! `PULSE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PulseConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pulse/pulse.toml` (system-wide)
/// 3. `~/.config/pulse/pulse.toml` (user XDG config)
/// 4. `./pulse.toml` (local directory)
/// 5. `PULSE_*` environment variables
pub fn load_config() -> Result<PulseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PulseConfig::default()))
        .merge(Toml::file("/etc/pulse/pulse.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pulse/pulse.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pulse.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PulseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PulseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PulseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PulseConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `PULSE_GEMINI_API_KEY` must map to
/// `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("PULSE_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: PULSE_GEMINI_API_KEY -> "gemini_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("survey_", "survey.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("gemini_", "gemini.", 1);
        mapped.into()
    })
}
