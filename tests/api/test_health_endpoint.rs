// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Health endpoint tests for GET /health

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use fabstir_summarizer_node::{
    api::http_server::{create_app, AppState},
    content::PageFetcher,
    llm::MockCompleter,
    memory::ConversationMemory,
    summarizer::WebpageSummarizer,
    version,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Helper: create an app with a scripted completer
fn setup_app() -> axum::Router {
    let completer = Arc::new(MockCompleter::new());
    let memory = Arc::new(ConversationMemory::new(3));
    let summarizer = Arc::new(WebpageSummarizer::new(
        completer,
        PageFetcher::new(2),
        memory,
        true,
    ));
    create_app(Arc::new(AppState::new(summarizer)))
}

#[tokio::test]
async fn test_health_returns_healthy() {
    let app = setup_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], version::VERSION_NUMBER);
}
