//! Summarization model client
//!
//! Encapsulates the single call to the pretrained summarization capability,
//! exposed over the Hugging Face Inference API.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::core::models::{SourceText, SummaryText};
use crate::errors::RecapError;

/// Upper bound on the generated summary, in model tokens.
const MAX_SUMMARY_LENGTH: usize = 130;
/// Lower bound on the generated summary, in model tokens.
const MIN_SUMMARY_LENGTH: usize = 30;
/// Large models can take a while to answer, especially on a cold start.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";

// Process-wide HTTP client, shared by all inference calls.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// The summarization capability: longer text in, shorter text out.
///
/// Implemented by [`ModelClient`] in production and by stubs in tests.
/// Callers guarantee the input is non-empty (enforced by [`SourceText`]);
/// implementations do not re-validate.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &SourceText) -> Result<SummaryText, RecapError>;
}

/// Client for the hosted summarization model.
pub struct ModelClient {
    endpoint: String,
    api_token: Option<String>,
}

impl ModelClient {
    #[must_use]
    pub fn new(model_id: &str, api_token: Option<String>) -> Self {
        Self {
            endpoint: format!("{INFERENCE_API_BASE}/{model_id}"),
            api_token,
        }
    }
}

#[async_trait]
impl Summarizer for ModelClient {
    async fn summarize(&self, text: &SourceText) -> Result<SummaryText, RecapError> {
        info!(
            "Requesting summary for {} characters of input",
            text.as_str().chars().count()
        );

        let request_body = json!({
            "inputs": text.as_str(),
            "parameters": {
                "max_length": MAX_SUMMARY_LENGTH,
                "min_length": MIN_SUMMARY_LENGTH,
                "do_sample": false
            }
        });

        let mut request = HTTP_CLIENT.post(&self.endpoint).json(&request_body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RecapError::HttpError(format!("Inference request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RecapError::ModelError(format!(
                "Inference API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            RecapError::ModelError(format!("Failed to parse inference response: {e}"))
        })?;

        let summary = extract_summary_text(&response_json)?;
        Ok(SummaryText::new(summary))
    }
}

/// Pull `summary_text` out of the Inference API payload.
///
/// The API answers `[{"summary_text": "..."}]` on success and
/// `{"error": "..."}` on failure, sometimes with a 200 status during model
/// warm-up, so both shapes are checked here.
fn extract_summary_text(response_json: &Value) -> Result<String, RecapError> {
    if let Some(summary) = response_json
        .get(0)
        .and_then(|item| item.get("summary_text"))
        .and_then(Value::as_str)
    {
        return Ok(summary.to_string());
    }

    if let Some(error) = response_json.get("error").and_then(Value::as_str) {
        return Err(RecapError::ModelError(format!(
            "Inference API error: {error}"
        )));
    }

    Err(RecapError::ModelError(
        "No summary_text in response".to_string(),
    ))
}
