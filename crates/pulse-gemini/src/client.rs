// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` API.
//!
//! Provides [`GeminiClient`] which handles request construction,
//! authentication, and response validation. Each call issues exactly one
//! request: retrying is the caller's decision, and a refreshed analysis is
//! simply a fresh invocation.

use std::time::Duration;

use pulse_config::model::GeminiConfig;
use pulse_core::{AnalysisResult, FeedbackEntry, PulseError};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::prompt::build_prompt;
use crate::schema::{analysis_response_schema, validate_payload};
use crate::types::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

/// HTTP client for Gemini API communication.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client from configuration.
    ///
    /// A missing API key fails with `PulseError::Config` here, before any
    /// network use.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, PulseError> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            PulseError::Config(
                "Gemini API key is missing; set gemini.api_key in pulse.toml or \
                 the PULSE_GEMINI_API_KEY environment variable"
                    .to_string(),
            )
        })?;
        Self::new(api_key, &config.model, &config.base_url)
    }

    /// Creates a client with explicit credentials.
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Result<Self, PulseError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| PulseError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| PulseError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the model identifier used for requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Requests a structured analysis of the given feedback snapshot.
    ///
    /// Preconditions and failure classification:
    /// - empty snapshot fails with `NoData` before any network use;
    /// - transport failures and non-2xx responses fail with `Provider`;
    /// - empty, unparseable, or schema-violating payloads fail with
    ///   `AnalysisFormat` carrying the raw payload.
    ///
    /// The result is returned to the caller uncached; invalidation on
    /// collection mutation is the caller's responsibility.
    pub async fn analyze(&self, entries: &[FeedbackEntry]) -> Result<AnalysisResult, PulseError> {
        if entries.is_empty() {
            return Err(PulseError::NoData);
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(entries),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_response_schema(),
            }),
        };

        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        debug!(model = %self.model, entries = entries.len(), "sending analysis request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PulseError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| PulseError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(status = %status, "analysis response received");

        if !status.is_success() {
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!(
                    "Gemini API error ({}): {}",
                    api_err.error.status, api_err.error.message
                )
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(PulseError::Provider {
                message,
                source: None,
            });
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| PulseError::AnalysisFormat {
                message: format!("response envelope is not valid JSON: {e}"),
                raw: body.clone(),
            })?;

        let payload = envelope.text().ok_or_else(|| PulseError::AnalysisFormat {
            message: "response contains no generated text".to_string(),
            raw: body.clone(),
        })?;

        validate_payload(&payload)
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::new("test-api-key", "gemini-3-flash-preview", "http://unused")
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn entry(text: &str, mood: u8) -> FeedbackEntry {
        FeedbackEntry {
            id: uuid_like(text),
            text: text.to_string(),
            mood,
            timestamp: 0,
        }
    }

    fn uuid_like(seed: &str) -> String {
        format!("test-{seed}")
    }

    fn candidate_body(payload: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": payload } ] } }
            ]
        })
    }

    #[tokio::test]
    async fn analyze_returns_validated_result() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/gemini-3-flash-preview:generateContent"))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(body_partial_json(serde_json::json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(
                r#"{"summary":"Team morale is mixed.","actionPoints":["A","B","C"]}"#,
            )))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client
            .analyze(&[entry("meetings too long", 2), entry("great coffee", 5)])
            .await
            .unwrap();

        assert_eq!(result.summary, "Team morale is mixed.");
        assert_eq!(result.action_points, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn empty_collection_fails_without_any_request() {
        let server = MockServer::start().await;

        let client = test_client(&server.uri());
        let result = client.analyze(&[]).await;
        assert!(matches!(result, Err(PulseError::NoData)));

        let received = server.received_requests().await.unwrap();
        assert!(received.is_empty(), "NoData must not touch the network");
    }

    #[tokio::test]
    async fn missing_action_points_is_a_format_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(candidate_body(r#"{"summary":"ok"}"#)),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.analyze(&[entry("hi", 3)]).await.unwrap_err();
        match err {
            PulseError::AnalysisFormat { raw, .. } => assert!(raw.contains("summary")),
            other => panic!("expected AnalysisFormat, got {other}"),
        }
    }

    #[tokio::test]
    async fn empty_generated_text_is_a_format_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.analyze(&[entry("hi", 3)]).await.unwrap_err();
        assert!(matches!(err, PulseError::AnalysisFormat { .. }));
    }

    #[tokio::test]
    async fn response_without_candidates_is_a_format_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.analyze(&[entry("hi", 3)]).await.unwrap_err();
        assert!(matches!(err, PulseError::AnalysisFormat { .. }));
    }

    #[tokio::test]
    async fn api_error_surfaces_as_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.analyze(&[entry("hi", 3)]).await.unwrap_err();
        match err {
            PulseError::Provider { message, .. } => {
                assert!(message.contains("INVALID_ARGUMENT"), "got: {message}");
                assert!(message.contains("API key not valid"), "got: {message}");
            }
            other => panic!("expected Provider, got {other}"),
        }
    }

    #[tokio::test]
    async fn server_failure_is_not_retried() {
        let server = MockServer::start().await;

        // Exactly one request: no internal retry loop.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.analyze(&[entry("hi", 3)]).await.unwrap_err();
        assert!(matches!(err, PulseError::Provider { .. }));
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = GeminiConfig::default();
        assert!(config.api_key.is_none());
        let err = GeminiClient::from_config(&config).unwrap_err();
        assert!(matches!(err, PulseError::Config(_)));
    }

    #[test]
    fn configured_api_key_builds_a_client() {
        let config = GeminiConfig {
            api_key: Some("key".into()),
            ..GeminiConfig::default()
        };
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(client.model(), "gemini-3-flash-preview");
    }
}
