// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! LLM relevance scoring for extracted sections
//!
//! One call scores up to ten section previews at a time. Anything that goes
//! wrong — the call itself, fenced or malformed JSON, wrong shapes — degrades
//! to a uniform fallback judgment set so summarization always proceeds.

pub mod budget;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::llm::TextCompleter;
use crate::summarizer::prompts;
use crate::utils::text::truncate_chars;

/// Maximum number of sections submitted for scoring
pub const MAX_SCORED_SECTIONS: usize = 10;

/// Characters of each section shown to the scoring model
pub const PREVIEW_CHARS: usize = 500;

/// Score given to every section when scoring falls back
const FALLBACK_SCORE: f32 = 8.0;

/// One relevance judgment, index-aligned with its input section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionJudgment {
    pub score: f32,
    pub rationale: String,
    pub include_in_summary: bool,
}

/// Scores section relevance through the completion client
pub struct RelevanceScorer {
    completer: Arc<dyn TextCompleter>,
}

impl RelevanceScorer {
    pub fn new(completer: Arc<dyn TextCompleter>) -> Self {
        Self { completer }
    }

    /// Score up to the first ten sections
    ///
    /// Returns one judgment per analyzed section on the fallback path; a
    /// well-formed model response may return fewer (the budgeter tolerates
    /// that), and surplus judgments are dropped.
    pub async fn score_sections(&self, sections: &[String]) -> Vec<SectionJudgment> {
        let analyzed = sections.len().min(MAX_SCORED_SECTIONS);
        if analyzed == 0 {
            return Vec::new();
        }

        let previews: Vec<&str> = sections[..analyzed]
            .iter()
            .map(|section| truncate_chars(section, PREVIEW_CHARS))
            .collect();
        let prompt = prompts::relevance_scoring_prompt(&previews);

        match self.completer.complete(&prompt).await {
            Ok(response) => match parse_judgments(&response) {
                Ok(mut judgments) => {
                    judgments.truncate(analyzed);
                    debug!(
                        "Scored {} sections, {} judgments returned",
                        analyzed,
                        judgments.len()
                    );
                    judgments
                }
                Err(e) => {
                    warn!("Unusable relevance scoring response: {}, using fallback", e);
                    fallback_judgments(analyzed)
                }
            },
            Err(e) => {
                warn!("Relevance scoring call failed: {}, using fallback", e);
                fallback_judgments(analyzed)
            }
        }
    }
}

/// Uniform include-everything judgments used when scoring fails
pub fn fallback_judgments(count: usize) -> Vec<SectionJudgment> {
    (0..count)
        .map(|_| SectionJudgment {
            score: FALLBACK_SCORE,
            rationale: "Automatic fallback scoring".to_string(),
            include_in_summary: true,
        })
        .collect()
}

/// Parse the scoring response, tolerating Markdown code fences
fn parse_judgments(response: &str) -> Result<Vec<SectionJudgment>, serde_json::Error> {
    serde_json::from_str(strip_code_fence(response))
}

/// Take the payload out of a ``` fence, dropping an optional `json` tag
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    if !trimmed.contains("```") {
        return trimmed;
    }

    let mut parts = trimmed.splitn(3, "```");
    let _ = parts.next();
    let inner = match parts.next() {
        Some(inner) => inner,
        None => return trimmed,
    };
    let inner = inner.trim_start();
    inner.strip_prefix("json").unwrap_or(inner).trim()
}
