// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! LLM completion client abstractions
//!
//! The pipeline depends only on [`TextCompleter`]; the Gemini client is the
//! production implementation and [`MockCompleter`] the scripted test one.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

/// Errors from a completion call
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The provider refused the prompt or the response on safety grounds
    #[error("content_blocked: {reason}")]
    ContentBlocked { reason: String },
    /// Quota or rate limits exhausted
    #[error("quota_exceeded: {message}")]
    QuotaExceeded { message: String },
    /// Non-success API response
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),
    /// The response carried no usable text
    #[error("empty response from model")]
    EmptyResponse,
    /// The response body could not be parsed
    #[error("failed to parse model response: {0}")]
    ResponseParse(String),
}

/// Single-prompt text completion
#[async_trait]
pub trait TextCompleter: Send + Sync {
    /// Run one completion over a prompt and return the raw response text
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Scripted completer for tests
///
/// Returns queued responses in order and records every prompt it was given.
/// An exhausted queue yields [`CompletionError::EmptyResponse`].
#[derive(Default)]
pub struct MockCompleter {
    responses: Mutex<VecDeque<Result<String, CompletionError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn push_response(&self, text: &str) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(Ok(text.to_string()));
        }
    }

    /// Queue a failure
    pub fn push_error(&self, error: CompletionError) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(Err(error));
        }
    }

    /// Prompts seen so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextCompleter for MockCompleter {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match self.responses.lock() {
            Ok(mut responses) => responses
                .pop_front()
                .unwrap_or(Err(CompletionError::EmptyResponse)),
            Err(_) => Err(CompletionError::EmptyResponse),
        }
    }
}
