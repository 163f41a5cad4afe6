//! Hosted inference client for pretrained summarization models.
//!
//! Talks to the Hugging Face hosted inference API over blocking HTTP. One
//! request per run: the full document text plus length bounds go out, a
//! list of summary candidates comes back, and the first candidate's
//! `summary_text` field is the result.

use crate::engine::{SummaryEngine, SummaryOptions};
use crate::error::{EngineError, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint for hosted inference.
pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co";

/// Default request timeout in seconds.
///
/// The hosted model call blocks until the engine returns; cold starts can
/// take minutes, so the transport timeout is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Configuration for the hosted engine client.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the inference API.
    pub api_url: String,
    /// Optional bearer token for authenticated requests.
    pub api_token: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Request body for a summarization call.
#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

/// Length bounds and decoding flags in the engine's wire format.
#[derive(Debug, Serialize)]
struct SummaryParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

/// One summary candidate in the engine response.
#[derive(Debug, Deserialize)]
struct SummaryCandidate {
    summary_text: String,
}

/// Error body the hosted API returns for non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Summarization engine backed by the hosted inference API.
pub struct HostedEngine {
    client: Client,
    model: String,
    config: EngineConfig,
}

impl HostedEngine {
    /// Creates an engine bound to the named pretrained model.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ClientInit`] if the HTTP client cannot be
    /// constructed.
    pub fn new(model: &str, config: EngineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EngineError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            model: model.to_string(),
            config,
        })
    }

    /// Returns the full endpoint URL for this engine's model.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.api_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Extracts the API error message from a response body, falling back to
    /// the raw body text.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .map_or_else(|_| body.trim().to_string(), |parsed| parsed.error)
    }
}

impl SummaryEngine for HostedEngine {
    fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        let request = SummaryRequest {
            inputs: text,
            parameters: SummaryParameters {
                max_length: options.max_length,
                min_length: options.min_length,
                do_sample: options.do_sample,
            },
        };

        let mut builder = self.client.post(self.endpoint()).json(&request);
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().map_err(EngineError::from)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();

            // 503 with an error body means the hosted model is still
            // spinning up. Surfaced as its own variant; no retry.
            if status == StatusCode::SERVICE_UNAVAILABLE {
                return Err(EngineError::ModelLoading {
                    model: self.model.clone(),
                }
                .into());
            }

            return Err(EngineError::Api {
                status: status.as_u16(),
                message: Self::error_message(&body),
            }
            .into());
        }

        let candidates: Vec<SummaryCandidate> = response
            .json()
            .map_err(|e| EngineError::MalformedResponse(e.to_string()))?;

        let first = candidates.into_iter().next().ok_or(EngineError::EmptyResponse)?;
        Ok(first.summary_text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn test_config(url: &str) -> EngineConfig {
        EngineConfig {
            api_url: url.to_string(),
            api_token: None,
            timeout: Duration::from_secs(5),
        }
    }

    fn test_engine(url: &str) -> HostedEngine {
        HostedEngine::new("facebook/bart-large-cnn", test_config(url)).unwrap()
    }

    #[test]
    fn test_endpoint() {
        let engine = test_engine("https://example.com/");
        assert_eq!(
            engine.endpoint(),
            "https://example.com/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_summarize_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/models/facebook/bart-large-cnn")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "parameters": {
                    "max_length": 130,
                    "min_length": 30,
                    "do_sample": false,
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"summary_text": "A short summary."}]"#)
            .create();

        let engine = test_engine(&server.url());
        let summary = engine
            .summarize("Some long article text.", &SummaryOptions::default())
            .unwrap();

        assert_eq!(summary, "A short summary.");
        mock.assert();
    }

    #[test]
    fn test_summarize_takes_first_candidate() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/models/facebook/bart-large-cnn")
            .with_status(200)
            .with_body(r#"[{"summary_text": "First."}, {"summary_text": "Second."}]"#)
            .create();

        let engine = test_engine(&server.url());
        let summary = engine
            .summarize("text", &SummaryOptions::default())
            .unwrap();
        assert_eq!(summary, "First.");
    }

    #[test]
    fn test_summarize_model_loading() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/models/facebook/bart-large-cnn")
            .with_status(503)
            .with_body(r#"{"error": "Model facebook/bart-large-cnn is currently loading", "estimated_time": 20.0}"#)
            .create();

        let engine = test_engine(&server.url());
        let err = engine
            .summarize("text", &SummaryOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Engine(EngineError::ModelLoading { .. })
        ));
    }

    #[test]
    fn test_summarize_api_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/models/facebook/bart-large-cnn")
            .with_status(400)
            .with_body(r#"{"error": "input is too long"}"#)
            .create();

        let engine = test_engine(&server.url());
        let err = engine
            .summarize("text", &SummaryOptions::default())
            .unwrap_err();
        match err {
            Error::Engine(EngineError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "input is too long");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_summarize_empty_response() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/models/facebook/bart-large-cnn")
            .with_status(200)
            .with_body("[]")
            .create();

        let engine = test_engine(&server.url());
        let err = engine
            .summarize("text", &SummaryOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Engine(EngineError::EmptyResponse)));
    }

    #[test]
    fn test_summarize_malformed_response() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/models/facebook/bart-large-cnn")
            .with_status(200)
            .with_body("not json")
            .create();

        let engine = test_engine(&server.url());
        let err = engine
            .summarize("text", &SummaryOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Engine(EngineError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_summarize_sends_bearer_token() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/models/facebook/bart-large-cnn")
            .match_header("authorization", "Bearer hf_test_token")
            .with_status(200)
            .with_body(r#"[{"summary_text": "ok"}]"#)
            .create();

        let config = EngineConfig {
            api_token: Some("hf_test_token".to_string()),
            ..test_config(&server.url())
        };
        let engine = HostedEngine::new("facebook/bart-large-cnn", config).unwrap();
        engine
            .summarize("text", &SummaryOptions::default())
            .unwrap();
        mock.assert();
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(HostedEngine::error_message("plain text body"), "plain text body");
        assert_eq!(
            HostedEngine::error_message(r#"{"error": "structured"}"#),
            "structured"
        );
    }
}
