// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod content;
pub mod llm;
pub mod memory;
pub mod scoring;
pub mod summarizer;
pub mod utils;
pub mod version;

// Re-export main types
pub use config::NodeConfig;
pub use content::{extract_sections, FetchError, PageFetcher};
pub use llm::{CompletionError, GeminiClient, MockCompleter, TextCompleter};
pub use memory::{ConversationMemory, CurrentDocument, Turn};
pub use scoring::{RelevanceScorer, SectionJudgment};
pub use summarizer::{SummarizeError, WebpageSummarizer};
