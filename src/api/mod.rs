// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod handlers;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse, MISSING_DOCUMENT_MESSAGE};
pub use handlers::{
    AnswerResponse, ClearResponse, HealthResponse, QuestionRequest, SummarizeRequest,
    SummaryResponse,
};
pub use http_server::{create_app, start_server, AppState};
