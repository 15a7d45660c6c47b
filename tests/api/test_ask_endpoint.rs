// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Question answering tests for POST /ask
//!
//! Verifies the missing-document precondition, question validation, the
//! happy path, and that failed model calls still record a turn.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use fabstir_summarizer_node::{
    api::http_server::{create_app, AppState},
    content::PageFetcher,
    llm::{CompletionError, MockCompleter},
    memory::{ConversationMemory, CurrentDocument},
    summarizer::WebpageSummarizer,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Helper: build the app plus handles on the completer and memory
fn setup() -> (Arc<MockCompleter>, Arc<ConversationMemory>, axum::Router) {
    let completer = Arc::new(MockCompleter::new());
    let memory = Arc::new(ConversationMemory::new(3));
    let summarizer = Arc::new(WebpageSummarizer::new(
        completer.clone(),
        PageFetcher::new(2),
        memory.clone(),
        true,
    ));
    let app = create_app(Arc::new(AppState::new(summarizer)));
    (completer, memory, app)
}

fn seed_document(memory: &ConversationMemory) {
    memory.set_document(CurrentDocument {
        url: "https://example.com/rust".to_string(),
        summary: "An article about Rust ownership.".to_string(),
        main_topic: "Rust Ownership".to_string(),
    });
}

fn ask_request(question: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/ask")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "question": question }).to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_ask_without_document_returns_400() {
    let (_completer, _memory, app) = setup();

    let response = app.oneshot(ask_request("What is this about?")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error_type"], "missing_document");
    assert_eq!(
        body["message"],
        "No webpage has been summarized yet. Please summarize a webpage first."
    );
}

#[tokio::test]
async fn test_ask_rejects_short_question() {
    let (_completer, memory, app) = setup();
    seed_document(&memory);

    let response = app.oneshot(ask_request("Hi")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(body["details"]["field"], "question");
}

#[tokio::test]
async fn test_ask_rejects_long_question() {
    let (_completer, memory, app) = setup();
    seed_document(&memory);

    let long_question = "a".repeat(501);
    let response = app.oneshot(ask_request(&long_question)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_ask_returns_answer_and_records_turn() {
    let (completer, memory, app) = setup();
    seed_document(&memory);
    completer.push_response("Ownership moves values between bindings.");

    let response = app
        .oneshot(ask_request("  What is ownership?  "))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    // The question is echoed back trimmed
    assert_eq!(body["question"], "What is ownership?");
    assert_eq!(body["answer"], "Ownership moves values between bindings.");

    let turns = memory.recent_turns();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].question, "What is ownership?");
    assert_eq!(turns[0].answer, "Ownership moves values between bindings.");

    // The prompt grounds on the stored document
    let prompts = completer.prompts();
    assert!(prompts[0].contains("An article about Rust ownership."));
    assert!(prompts[0].contains("MAIN TOPIC:\nRust Ownership"));
}

#[tokio::test]
async fn test_ask_failure_substitutes_message_and_records_turn() {
    let (completer, memory, app) = setup();
    seed_document(&memory);
    completer.push_error(CompletionError::QuotaExceeded {
        message: "requests per day exceeded".to_string(),
    });

    let response = app.oneshot(ask_request("What is this?")).await.unwrap();
    // Substituted answers still return 200
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body["answer"],
        "The API usage limit has been reached. Please try again later."
    );

    let turns = memory.recent_turns();
    assert_eq!(turns.len(), 1);
    assert_eq!(
        turns[0].answer,
        "The API usage limit has been reached. Please try again later."
    );
}
