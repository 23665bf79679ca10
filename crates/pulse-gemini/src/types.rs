// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini `generateContent` request/response wire types.

use serde::{Deserialize, Serialize};

// --- Request types ---

/// A `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn for analysis requests.
    pub contents: Vec<Content>,

    /// Generation constraints, including the structured-output schema.
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Content parts; analysis requests carry one text part.
    pub parts: Vec<Part>,
}

/// A single content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text payload of this part.
    pub text: String,
}

/// Generation configuration constraining the model's output.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// MIME type the response must use (`application/json` here).
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,

    /// JSON schema the response must conform to.
    #[serde(rename = "responseSchema")]
    pub response_schema: serde_json::Value,
}

// --- Response types ---

/// A `generateContent` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates; the first one carries the payload.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content for this candidate.
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>(),
        )
    }
}

// --- Error types ---

/// Error envelope returned by the Gemini API on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// The error detail object.
    pub error: ApiErrorDetail,
}

/// Detail of a Gemini API error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric error code (mirrors the HTTP status).
    #[serde(default)]
    pub code: i32,
    /// Human-readable failure description.
    pub message: String,
    /// Symbolic status (e.g., "INVALID_ARGUMENT").
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_concatenates_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn request_serializes_with_camel_case_config() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".into(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".into(),
                response_schema: serde_json::json!({"type": "OBJECT"}),
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }
}
