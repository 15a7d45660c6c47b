// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Current document tests for GET /current

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

fn current_request() -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/current")
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_current_is_null_before_any_summary() {
    let (_memory, app) = setup();

    let response = app.oneshot(current_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_current_returns_document() {
    let (memory, app) = setup();
    memory.set_document(CurrentDocument {
        url: "https://example.com/birds".to_string(),
        summary: "A page about migratory birds.".to_string(),
        main_topic: "Migratory Birds".to_string(),
    });

    let response = app.oneshot(current_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["url"], "https://example.com/birds");
    assert_eq!(body["summary"], "A page about migratory birds.");
    assert_eq!(body["main_topic"], "Migratory Birds");
}
