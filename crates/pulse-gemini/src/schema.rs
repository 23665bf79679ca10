// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured-output schema declared to the provider.

use pulse_core::{AnalysisResult, PulseError};

/// The response schema sent with every analysis request.
///
/// Constrains the provider to a JSON object with a string `summary` and a
/// string-array `actionPoints`. The provider is still untrusted; responses
/// are re-validated by [`validate_payload`].
pub fn analysis_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A one-sentence summary of the overall sentiment."
            },
            "actionPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Exactly 3 actionable steps for management."
            }
        },
        "required": ["summary", "actionPoints"]
    })
}

/// Number of action points a well-formed analysis carries.
pub const ACTION_POINT_COUNT: usize = 3;

/// Parse and validate a raw provider payload against the analysis contract.
///
/// Declaring the schema does not make the provider conform; every payload is
/// checked here. Any parse or shape failure becomes `AnalysisFormat` with
/// the raw payload attached for diagnostics.
pub fn validate_payload(raw: &str) -> Result<AnalysisResult, PulseError> {
    if raw.trim().is_empty() {
        return Err(PulseError::AnalysisFormat {
            message: "empty response from provider".to_string(),
            raw: raw.to_string(),
        });
    }

    let result: AnalysisResult =
        serde_json::from_str(raw).map_err(|e| PulseError::AnalysisFormat {
            message: format!("response is not a valid analysis object: {e}"),
            raw: raw.to_string(),
        })?;

    if result.summary.trim().is_empty() {
        return Err(PulseError::AnalysisFormat {
            message: "summary is empty".to_string(),
            raw: raw.to_string(),
        });
    }

    if result.action_points.len() != ACTION_POINT_COUNT {
        return Err(PulseError::AnalysisFormat {
            message: format!(
                "expected exactly {ACTION_POINT_COUNT} action points, got {}",
                result.action_points.len()
            ),
            raw: raw.to_string(),
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_both_fields() {
        let schema = analysis_response_schema();
        assert_eq!(
            schema["required"],
            serde_json::json!(["summary", "actionPoints"])
        );
        assert_eq!(schema["properties"]["actionPoints"]["type"], "ARRAY");
    }

    #[test]
    fn well_formed_payload_validates() {
        let result = validate_payload(
            r#"{"summary":"Team morale is mixed.","actionPoints":["A","B","C"]}"#,
        )
        .unwrap();
        assert_eq!(result.summary, "Team morale is mixed.");
        assert_eq!(result.action_points, vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_action_points_is_a_format_error() {
        let err = validate_payload(r#"{"summary":"ok"}"#).unwrap_err();
        match err {
            PulseError::AnalysisFormat { raw, .. } => {
                assert_eq!(raw, r#"{"summary":"ok"}"#);
            }
            other => panic!("expected AnalysisFormat, got {other}"),
        }
    }

    #[test]
    fn wrong_arity_is_a_format_error() {
        let two = r#"{"summary":"ok","actionPoints":["A","B"]}"#;
        assert!(matches!(
            validate_payload(two),
            Err(PulseError::AnalysisFormat { .. })
        ));

        let four = r#"{"summary":"ok","actionPoints":["A","B","C","D"]}"#;
        assert!(matches!(
            validate_payload(four),
            Err(PulseError::AnalysisFormat { .. })
        ));
    }

    #[test]
    fn wrong_types_are_format_errors() {
        assert!(matches!(
            validate_payload(r#"{"summary":7,"actionPoints":["A","B","C"]}"#),
            Err(PulseError::AnalysisFormat { .. })
        ));
        assert!(matches!(
            validate_payload(r#"{"summary":"ok","actionPoints":"not an array"}"#),
            Err(PulseError::AnalysisFormat { .. })
        ));
    }

    #[test]
    fn empty_and_non_json_payloads_are_format_errors() {
        assert!(matches!(
            validate_payload(""),
            Err(PulseError::AnalysisFormat { .. })
        ));
        assert!(matches!(
            validate_payload("   "),
            Err(PulseError::AnalysisFormat { .. })
        ));
        assert!(matches!(
            validate_payload("<html>oops</html>"),
            Err(PulseError::AnalysisFormat { .. })
        ));
    }
}
