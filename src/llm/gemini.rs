// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Gemini completion client
//!
//! Calls the `models/{model}:generateContent` endpoint with API-key auth.
//! Sampling is pinned (zero temperature) so repeated runs over the same page
//! produce stable summaries.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use super::{CompletionError, TextCompleter};
use crate::utils::text::truncate_chars;

/// Default Gemini API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fixed sampling parameters for reproducible output
const TEMPERATURE: f64 = 0.0;
const TOP_P: f64 = 0.95;
const TOP_K: u32 = 40;

/// Characters of an error body kept in error messages
const ERROR_BODY_CHARS: usize = 300;

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client for the given model
    pub fn new(api_key: String, model: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model,
        }
    }

    /// Override the API base URL (used by tests)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_request_body(prompt: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}],
            }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "topP": TOP_P,
                "topK": TOP_K,
            },
        })
    }

    /// Pull the completion text out of a response body
    fn parse_response(body: &Value) -> Result<String, CompletionError> {
        // Prompt-level safety blocks carry no candidates
        if let Some(reason) = body["promptFeedback"]["blockReason"].as_str() {
            return Err(CompletionError::ContentBlocked {
                reason: reason.to_string(),
            });
        }

        let candidates = body["candidates"].as_array().ok_or_else(|| {
            CompletionError::ResponseParse("missing 'candidates' array".to_string())
        })?;
        let candidate = candidates.first().ok_or(CompletionError::EmptyResponse)?;

        if candidate["finishReason"].as_str() == Some("SAFETY") {
            return Err(CompletionError::ContentBlocked {
                reason: "SAFETY".to_string(),
            });
        }

        let text: String = candidate["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }
        Ok(text)
    }

    /// Map a non-success HTTP response to a typed error
    fn map_http_error(status: u16, body: &str) -> CompletionError {
        let snippet = truncate_chars(body, ERROR_BODY_CHARS).to_string();
        if status == 429 || body.contains("RESOURCE_EXHAUSTED") || body.contains("quota") {
            return CompletionError::QuotaExceeded { message: snippet };
        }
        CompletionError::Api {
            status,
            message: snippet,
        }
    }
}

#[async_trait]
impl TextCompleter for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        debug!(
            "Gemini request: model={}, prompt {} chars",
            self.model,
            prompt.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint_url())
            .header("content-type", "application/json")
            .json(&Self::build_request_body(prompt))
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("Gemini API returned HTTP {}", status);
            return Err(Self::map_http_error(status.as_u16(), &body_text));
        }

        let body: Value = serde_json::from_str(&body_text)
            .map_err(|e| CompletionError::ResponseParse(e.to_string()))?;
        Self::parse_response(&body)
    }
}
