//! HTTP inference engine
//!
//! Talks the Hugging Face serverless-inference protocol: POST
//! `{base}/models/{id}` with the input text and length parameters, response
//! is an array of `{"summary_text": …}` candidates. Works against the
//! hosted API or any endpoint speaking the same protocol.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::BenchError;
use crate::models::{Device, SummarizationRequest};

use super::{EngineProvider, SummarizationEngine};

/// Default endpoint for the hosted serverless API
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Short input used to warm a model up during load
const WARMUP_TEXT: &str =
    "The quick brown fox jumps over the lazy dog near the bank of the river.";

/// Engine provider backed by an HTTP inference server
#[derive(Clone)]
pub struct HttpEngineProvider {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpEngineProvider {
    /// Create a provider for the given endpoint
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url.trim_end_matches('/'), model)
    }
}

impl EngineProvider for HttpEngineProvider {
    type Engine = HttpEngine;

    async fn load(&self, model: &str, device: Device) -> Result<Self::Engine, BenchError> {
        // Placement is the server's concern; the selection only travels this far.
        debug!("device selection '{device}' delegated to the inference server");

        let engine = HttpEngine {
            client: self.client.clone(),
            url: self.model_url(model),
            token: self.token.clone(),
            model: model.to_string(),
        };

        // Warm-up pins the model server-side so its load time stays out of
        // the measured window.
        engine
            .warmup()
            .await
            .map_err(|message| BenchError::engine_load(model, message))?;

        Ok(engine)
    }
}

/// A loaded HTTP engine bound to one model endpoint
#[derive(Clone)]
pub struct HttpEngine {
    client: Client,
    url: String,
    token: Option<String>,
    model: String,
}

impl HttpEngine {
    async fn warmup(&self) -> Result<(), String> {
        let body = InferenceBody {
            inputs: WARMUP_TEXT,
            parameters: Parameters {
                max_length: 20,
                min_length: 5,
            },
            options: Options {
                use_cache: false,
                wait_for_model: true,
            },
        };
        self.post(&body).await.map(|_| ())
    }

    async fn post(&self, body: &InferenceBody<'_>) -> Result<Vec<SummaryCandidate>, String> {
        let mut request = self.client.post(&self.url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                format!("connection refused to {}", self.url)
            } else {
                e.to_string()
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(describe_failure(status, &text));
        }

        response
            .json::<Vec<SummaryCandidate>>()
            .await
            .map_err(|e| format!("unexpected response shape: {e}"))
    }
}

impl SummarizationEngine for HttpEngine {
    async fn summarize(&self, request: &SummarizationRequest) -> Result<Vec<String>, BenchError> {
        let body = InferenceBody {
            inputs: &request.text,
            parameters: Parameters {
                max_length: request.max_length,
                min_length: request.min_length,
            },
            options: Options {
                use_cache: false,
                wait_for_model: true,
            },
        };

        let candidates = self
            .post(&body)
            .await
            .map_err(|message| BenchError::inference(&self.model, message))?;

        Ok(candidates.into_iter().map(|c| c.summary_text).collect())
    }
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    // The server reports errors as {"error": "..."}; fall back to the raw
    // body when it does not.
    let detail = serde_json::from_str::<ApiError>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.chars().take(200).collect());

    match status {
        StatusCode::NOT_FOUND => format!("model not found ({detail})"),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            format!("authentication required ({detail})")
        }
        other => format!("server returned {other}: {detail}"),
    }
}

#[derive(Serialize)]
struct InferenceBody<'a> {
    inputs: &'a str,
    parameters: Parameters,
    options: Options,
}

#[derive(Serialize)]
struct Parameters {
    max_length: u32,
    min_length: u32,
}

#[derive(Serialize)]
struct Options {
    use_cache: bool,
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct SummaryCandidate {
    summary_text: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_url() {
        let provider =
            HttpEngineProvider::new("https://api-inference.huggingface.co/", None, 30).unwrap();
        assert_eq!(
            provider.model_url("facebook/bart-large-cnn"),
            "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_body_serialization() {
        let body = InferenceBody {
            inputs: "some text",
            parameters: Parameters {
                max_length: 100,
                min_length: 25,
            },
            options: Options {
                use_cache: false,
                wait_for_model: true,
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["inputs"], "some text");
        assert_eq!(json["parameters"]["max_length"], 100);
        assert_eq!(json["parameters"]["min_length"], 25);
        assert_eq!(json["options"]["wait_for_model"], true);
    }

    #[test]
    fn test_response_parsing() {
        let payload = r#"[{"summary_text": "hello world"}]"#;
        let candidates: Vec<SummaryCandidate> = serde_json::from_str(payload).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].summary_text, "hello world");
    }

    #[test]
    fn test_describe_failure() {
        let message = describe_failure(
            StatusCode::NOT_FOUND,
            r#"{"error": "model does not exist"}"#,
        );
        assert!(message.contains("model not found"));
        assert!(message.contains("model does not exist"));

        let message = describe_failure(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(message.contains("500"));
    }
}
