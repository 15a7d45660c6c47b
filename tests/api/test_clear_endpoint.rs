// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Memory reset tests for POST /clear

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use fabstir_summarizer_node::{
    api::http_server::{create_app, AppState},
    content::PageFetcher,
    llm::MockCompleter,
    memory::{ConversationMemory, CurrentDocument},
    summarizer::WebpageSummarizer,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

fn setup() -> (Arc<ConversationMemory>, axum::Router) {
    let completer = Arc::new(MockCompleter::new());
    let memory = Arc::new(ConversationMemory::new(3));
    let summarizer = Arc::new(WebpageSummarizer::new(
        completer,
        PageFetcher::new(2),
        memory.clone(),
        true,
    ));
    let app = create_app(Arc::new(AppState::new(summarizer)));
    (memory, app)
}

#[tokio::test]
async fn test_clear_resets_document_and_turns() {
    let (memory, app) = setup();
    memory.set_document(CurrentDocument {
        url: "https://example.com".to_string(),
        summary: "Some summary.".to_string(),
        main_topic: "Some Topic".to_string(),
    });
    memory.append_turn("A question?", "An answer.");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/clear")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Memory cleared successfully");

    assert!(memory.document().is_none());
    assert!(memory.recent_turns().is_empty());

    // The API now reports no current document
    let current = Request::builder()
        .method(Method::GET)
        .uri("/current")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(current).await.unwrap();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert!(body.is_null());
}
