// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Conversation memory for the summarizer
//!
//! Holds the single current document and a bounded window of recent
//! question/answer turns. Shared across requests behind an `Arc`; every
//! operation takes one lock and applies atomically.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::RwLock;

/// Default number of turns retained
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Rendered history when no turns exist yet
pub const EMPTY_HISTORY: &str = "No conversation history.";

/// The most recently summarized page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDocument {
    pub url: String,
    pub summary: String,
    pub main_topic: String,
}

/// One question/answer exchange
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub question: String,
    pub answer: String,
}

struct MemoryState {
    document: Option<CurrentDocument>,
    turns: VecDeque<Turn>,
}

/// Bounded conversation memory
pub struct ConversationMemory {
    state: RwLock<MemoryState>,
    window_size: usize,
}

impl ConversationMemory {
    /// Create a memory retaining at most `window_size` turns
    pub fn new(window_size: usize) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                document: None,
                turns: VecDeque::new(),
            }),
            window_size,
        }
    }

    /// Replace the current document
    pub fn set_document(&self, document: CurrentDocument) {
        if let Ok(mut state) = self.state.write() {
            state.document = Some(document);
        }
    }

    /// The current document, if any page has been summarized
    pub fn document(&self) -> Option<CurrentDocument> {
        self.state.read().ok().and_then(|s| s.document.clone())
    }

    /// Record a turn, evicting the oldest beyond the window
    pub fn append_turn(&self, question: &str, answer: &str) {
        if let Ok(mut state) = self.state.write() {
            state.turns.push_back(Turn {
                question: question.to_string(),
                answer: answer.to_string(),
            });
            while state.turns.len() > self.window_size {
                state.turns.pop_front();
            }
        }
    }

    /// Retained turns, oldest first
    pub fn recent_turns(&self) -> Vec<Turn> {
        self.state
            .read()
            .map(|s| s.turns.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Render the turn window for prompt assembly
    ///
    /// Turns are separated by blank lines with no trailing whitespace.
    pub fn formatted_history(&self) -> String {
        let turns = self.recent_turns();
        if turns.is_empty() {
            return EMPTY_HISTORY.to_string();
        }

        let mut formatted = String::new();
        for turn in &turns {
            formatted.push_str(&format!("User: {}\n\n", turn.question));
            formatted.push_str(&format!("Assistant: {}\n\n", turn.answer));
        }
        formatted.trim().to_string()
    }

    /// Drop the document and all turns
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.write() {
            state.document = None;
            state.turns.clear();
        }
    }

    /// The configured turn window
    pub fn window_size(&self) -> usize {
        self.window_size
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}
