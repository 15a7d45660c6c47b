// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summarization pipeline and grounded question answering
//!
//! Orchestrates fetch, section extraction, relevance scoring, budgeting,
//! the summary and topic model calls, and storage of the result as the
//! grounding document for follow-up questions.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::content::{extract_sections, page_text, FetchError, PageFetcher};
use crate::llm::{CompletionError, TextCompleter};
use crate::memory::{ConversationMemory, CurrentDocument};
use crate::scoring::budget::{prioritized_content, select_sections, simple_content};
use crate::scoring::RelevanceScorer;
use crate::utils::text::char_len;

use super::prompts;

/// Grounding summary used before any page has been summarized
pub const NO_DOCUMENT_SUMMARY: &str = "No webpage has been summarized yet.";

/// Grounding topic used before any page has been summarized
pub const NO_DOCUMENT_TOPIC: &str = "Unknown";

/// Answer substituted when the provider blocks the question
const BLOCKED_ANSWER: &str = "I'm unable to answer this question due to content restrictions. \
     Please try rephrasing your question.";

/// Answer substituted when quota is exhausted
const QUOTA_ANSWER: &str = "The API usage limit has been reached. Please try again later.";

/// Errors from a summarize operation
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The page could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The summary call, or the topic call after its retry, failed
    #[error("Error summarizing webpage: {0}")]
    Summary(CompletionError),
}

/// Summarizes webpages and answers questions grounded in the result
///
/// One summarizer owns the fetcher, the relevance scorer, and a handle to
/// conversation memory. Summarizing a page replaces the current document;
/// questions are always answered against whatever document is stored.
pub struct WebpageSummarizer {
    completer: Arc<dyn TextCompleter>,
    fetcher: PageFetcher,
    scorer: RelevanceScorer,
    memory: Arc<ConversationMemory>,
    content_scoring: bool,
}

impl WebpageSummarizer {
    pub fn new(
        completer: Arc<dyn TextCompleter>,
        fetcher: PageFetcher,
        memory: Arc<ConversationMemory>,
        content_scoring: bool,
    ) -> Self {
        let scorer = RelevanceScorer::new(completer.clone());
        Self {
            completer,
            fetcher,
            scorer,
            memory,
            content_scoring,
        }
    }

    /// Fetch a page and summarize it
    ///
    /// On success the resulting document becomes the grounding document
    /// for subsequent questions.
    pub async fn summarize_url(&self, url: &str) -> Result<CurrentDocument, SummarizeError> {
        let markup = self.fetcher.fetch(url).await?;
        self.summarize_markup(url, &markup).await
    }

    /// Summarize already-fetched markup
    pub async fn summarize_markup(
        &self,
        url: &str,
        markup: &str,
    ) -> Result<CurrentDocument, SummarizeError> {
        let content = self.build_content(markup).await;
        debug!("Built {} chars of content for: {}", char_len(&content), url);

        let summary = self
            .completer
            .complete(&prompts::summarization_prompt(&content))
            .await
            .map_err(SummarizeError::Summary)?;
        let summary = summary.trim().to_string();

        let main_topic = self
            .extract_main_topic(&summary)
            .await
            .map_err(SummarizeError::Summary)?;
        info!("Summarized {} (topic: {})", url, main_topic);

        let document = CurrentDocument {
            url: url.to_string(),
            summary,
            main_topic,
        };
        self.memory.set_document(document.clone());
        Ok(document)
    }

    /// Answer a question against the current document
    ///
    /// Never fails: model failures are substituted with fixed user-facing
    /// messages. The exchange is recorded as a turn either way, so the
    /// history stays an accurate transcript of what the user saw.
    pub async fn answer_question(&self, question: &str) -> String {
        let document = self.memory.document();
        let (summary, main_topic) = match &document {
            Some(doc) => (doc.summary.as_str(), doc.main_topic.as_str()),
            None => (NO_DOCUMENT_SUMMARY, NO_DOCUMENT_TOPIC),
        };

        let history = self.memory.formatted_history();
        let prompt = prompts::answer_prompt(summary, main_topic, &history, question);

        let answer = match self.completer.complete(&prompt).await {
            Ok(response) => response.trim().to_string(),
            Err(e) => {
                warn!("Answer call failed: {}", e);
                classify_answer_failure(&e)
            }
        };

        self.memory.append_turn(question, &answer);
        answer
    }

    /// The current grounding document, if any page has been summarized
    pub fn current_document(&self) -> Option<CurrentDocument> {
        self.memory.document()
    }

    /// Drop the current document and all conversation turns
    pub fn clear_memory(&self) {
        self.memory.clear();
    }

    /// Assemble the content block the summary prompt is built over
    async fn build_content(&self, markup: &str) -> String {
        if !self.content_scoring {
            return simple_content(&page_text(markup));
        }

        let sections = extract_sections(markup);
        let judgments = self.scorer.score_sections(&sections).await;
        let selected = select_sections(&sections, &judgments);
        debug!(
            "Selected {} of {} sections for the summary",
            selected.len(),
            sections.len()
        );
        prioritized_content(&selected)
    }

    /// Extract a short topic from the summary
    ///
    /// The templated prompt gets one retry with a direct phrasing; a failed
    /// retry fails the whole summarize.
    async fn extract_main_topic(&self, summary: &str) -> Result<String, CompletionError> {
        match self.completer.complete(&prompts::topic_prompt(summary)).await {
            Ok(topic) => Ok(topic.trim().to_string()),
            Err(e) => {
                warn!("Topic extraction failed ({}), retrying with direct prompt", e);
                let topic = self
                    .completer
                    .complete(&prompts::topic_fallback_prompt(summary))
                    .await?;
                Ok(topic.trim().to_string())
            }
        }
    }
}

/// Map an answer-call failure to its fixed user-facing message
///
/// Typed variants win; untyped errors are matched on their rendered text
/// so wrapped provider messages still classify.
fn classify_answer_failure(error: &CompletionError) -> String {
    match error {
        CompletionError::ContentBlocked { .. } => BLOCKED_ANSWER.to_string(),
        CompletionError::QuotaExceeded { .. } => QUOTA_ANSWER.to_string(),
        other => {
            let message = other.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("content_blocked") {
                BLOCKED_ANSWER.to_string()
            } else if lowered.contains("quota_exceeded") {
                QUOTA_ANSWER.to_string()
            } else {
                format!(
                    "An error occurred while processing your question: {}",
                    message
                )
            }
        }
    }
}
