// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Pulse configuration system.

use pulse_config::model::PulseConfig;
use pulse_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_pulse_config() {
    let toml = r#"
[survey]
name = "team-check-in"
log_level = "debug"

[storage]
database_path = "/tmp/test-pulse.db"

[gemini]
api_key = "test-key-123"
model = "gemini-3-flash-preview"
base_url = "https://example.invalid/models"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.survey.name, "team-check-in");
    assert_eq!(config.survey.log_level, "debug");
    assert_eq!(config.storage.database_path, "/tmp/test-pulse.db");
    assert_eq!(config.gemini.api_key.as_deref(), Some("test-key-123"));
    assert_eq!(config.gemini.model, "gemini-3-flash-preview");
    assert_eq!(config.gemini.base_url, "https://example.invalid/models");
}

/// Unknown field in [survey] section produces an error.
#[test]
fn unknown_field_in_survey_produces_error() {
    let toml = r#"
[survey]
naem = "test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    // Figment wraps serde's deny_unknown_fields error
    assert!(
        err_str.contains("unknown field") || err_str.contains("naem"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown field in [gemini] section produces an error.
#[test]
fn unknown_field_in_gemini_produces_error() {
    let toml = r#"
[gemini]
api_kye = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.survey.name, "pulse");
    assert_eq!(config.survey.log_level, "info");
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-3-flash-preview");
    assert!(config
        .gemini
        .base_url
        .starts_with("https://generativelanguage.googleapis.com"));
    assert!(!config.storage.database_path.is_empty());
}

/// Environment variable PULSE_GEMINI_API_KEY overrides gemini.api_key.
///
/// Tested via the Figment builder directly to control env vars in-test.
#[test]
fn env_var_overrides_gemini_api_key() {
    use figment::{
        providers::{Env, Serialized},
        Figment,
    };

    figment::Jail::expect_with(|jail| {
        jail.set_env("PULSE_GEMINI_API_KEY", "from-env");

        let config: PulseConfig = Figment::new()
            .merge(Serialized::defaults(PulseConfig::default()))
            .merge(Env::prefixed("PULSE_").map(|key| {
                key.as_str().replacen("gemini_", "gemini.", 1).into()
            }))
            .extract()?;

        assert_eq!(config.gemini.api_key.as_deref(), Some("from-env"));
        Ok(())
    });
}

/// Validation failures surface through load_and_validate_str.
#[test]
fn semantic_validation_runs_after_deserialization() {
    let toml = r#"
[survey]
log_level = "loud"
"#;

    let errors = load_and_validate_str(toml).expect_err("bad log level should fail validation");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("log_level"));
}

/// A fully-defaulted config passes validation end to end.
#[test]
fn defaults_pass_validation() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.survey.name, "pulse");
}
