// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration loaded from environment variables

use std::env;

/// Configuration for the summarizer node
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Google AI Studio API key (required)
    pub google_api_key: String,
    /// Gemini model name
    pub model_name: String,
    /// Host the HTTP API binds to
    pub api_host: String,
    /// Port the HTTP API binds to
    pub api_port: u16,
    /// Page fetch timeout in seconds
    pub fetch_timeout_secs: u64,
    /// Model call timeout in seconds
    pub llm_timeout_secs: u64,
    /// Number of conversation turns kept in memory
    pub memory_window_size: usize,
    /// Whether sections are relevance-scored before summarization
    pub content_scoring_enabled: bool,
}

impl NodeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gemini-1.5-pro".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            memory_window_size: env::var("MEMORY_WINDOW_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            // Scoring enabled by default; set CONTENT_SCORING_ENABLED=false to
            // summarize the flat page text instead
            content_scoring_enabled: env::var("CONTENT_SCORING_ENABLED")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(true),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.google_api_key.trim().is_empty() {
            return Err("GOOGLE_API_KEY must be set".to_string());
        }
        if self.api_port == 0 {
            return Err("API port must be greater than 0".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            return Err("Fetch timeout must be greater than 0".to_string());
        }
        if self.llm_timeout_secs == 0 {
            return Err("LLM timeout must be greater than 0".to_string());
        }
        if self.memory_window_size == 0 {
            return Err("Memory window size must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            google_api_key: String::new(),
            model_name: "gemini-1.5-pro".to_string(),
            api_host: "0.0.0.0".to_string(),
            api_port: 8000,
            fetch_timeout_secs: 10,
            llm_timeout_secs: 60,
            memory_window_size: 3,
            content_scoring_enabled: true,
        }
    }
}
