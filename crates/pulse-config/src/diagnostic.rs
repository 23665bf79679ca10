// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic error types for configuration failures.
//!
//! Wraps Figment deserialization errors and semantic validation failures in
//! miette diagnostics so the CLI can render them with codes and help text.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The configuration failed to deserialize (unknown key, wrong type,
    /// malformed TOML).
    #[error("failed to load configuration: {message}")]
    #[diagnostic(
        code(pulse::config::parse),
        help("check pulse.toml for typos; run with an empty config to see the defaults")
    )]
    Parse {
        /// Figment's rendered description of the failure.
        message: String,
    },

    /// A configuration value failed semantic validation.
    #[error("invalid configuration: {message}")]
    #[diagnostic(code(pulse::config::validation))]
    Validation {
        /// Description of the violated constraint.
        message: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

/// Render all collected configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_mentions_the_cause() {
        let err = ConfigError::Parse {
            message: "unknown field `naem`".into(),
        };
        assert!(err.to_string().contains("naem"));
    }

    #[test]
    fn validation_error_mentions_the_constraint() {
        let err = ConfigError::Validation {
            message: "survey.log_level `loud` is not a valid level".into(),
        };
        assert!(err.to_string().contains("log_level"));
    }
}
