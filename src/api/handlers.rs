// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Shortest accepted question, counted in characters after trimming
pub const MIN_QUESTION_CHARS: usize = 3;

/// Longest accepted question, counted in characters after trimming
pub const MAX_QUESTION_CHARS: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub url: String,
    pub summary: String,
    pub main_topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl QuestionRequest {
    pub fn validate(&self) -> Result<(), crate::api::ApiError> {
        use crate::api::ApiError;

        let length = self.question.trim().chars().count();

        if length < MIN_QUESTION_CHARS {
            return Err(ApiError::ValidationError {
                field: "question".to_string(),
                message: format!("Question must be at least {} characters", MIN_QUESTION_CHARS),
            });
        }

        if length > MAX_QUESTION_CHARS {
            return Err(ApiError::ValidationError {
                field: "question".to_string(),
                message: format!("Question must be at most {} characters", MAX_QUESTION_CHARS),
            });
        }

        Ok(())
    }
}
