// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Summarization tests for POST /summarize
//!
//! Drives the whole pipeline through the HTTP surface: a wiremock origin
//! serves the page and a scripted completer stands in for the model.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use fabstir_summarizer_node::{
    api::http_server::{create_app, AppState},
    content::PageFetcher,
    llm::{CompletionError, MockCompleter},
    memory::ConversationMemory,
    summarizer::WebpageSummarizer,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

const JUDGMENT_OK: &str =
    r#"[{"score": 9.0, "rationale": "core content", "include_in_summary": true}]"#;

const ARTICLE_PAGE: &str = r#"
    <html>
    <body>
        <nav>Home | About</nav>
        <article>
            <h1>Understanding Ownership</h1>
            <p>Ownership is the set of rules that governs how Rust programs manage
            memory, checked entirely at compile time with no garbage collector.</p>
        </article>
    </body>
    </html>
"#;

/// Helper: build the app plus handles on the completer and memory
fn setup() -> (Arc<MockCompleter>, Arc<ConversationMemory>, axum::Router) {
    let completer = Arc::new(MockCompleter::new());
    let memory = Arc::new(ConversationMemory::new(3));
    let summarizer = Arc::new(WebpageSummarizer::new(
        completer.clone(),
        PageFetcher::new(5),
        memory.clone(),
        true,
    ));
    let app = create_app(Arc::new(AppState::new(summarizer)));
    (completer, memory, app)
}

fn summarize_request(url: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/summarize")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "url": url }).to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

async fn serve_page(path: &str, page: &str) -> wiremock::MockServer {
    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path(path))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_summarize_success() {
    let (completer, memory, app) = setup();
    completer.push_response(JUDGMENT_OK);
    completer.push_response("The article explains Rust's ownership rules.");
    completer.push_response("Rust Ownership");

    let server = serve_page("/article", ARTICLE_PAGE).await;
    let url = format!("{}/article", server.uri());

    let response = app.oneshot(summarize_request(&url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["url"], url.as_str());
    assert_eq!(
        body["summary"],
        "The article explains Rust's ownership rules."
    );
    assert_eq!(body["main_topic"], "Rust Ownership");

    // The result became the grounding document
    let document = memory.document().unwrap();
    assert_eq!(document.url, url);
    assert_eq!(document.main_topic, "Rust Ownership");
}

#[tokio::test]
async fn test_summarize_rejects_bad_scheme() {
    let (_completer, _memory, app) = setup();

    let response = app
        .oneshot(summarize_request("ftp://example.com/page"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error_type"], "summarize_error");
    assert_eq!(
        body["message"],
        "Error: URL must start with http:// or https://"
    );
}

#[tokio::test]
async fn test_summarize_fetch_failure() {
    let (_completer, memory, app) = setup();

    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/missing"))
        .respond_with(wiremock::ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let response = app.oneshot(summarize_request(&url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error_type"], "summarize_error");
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error accessing URL: HTTP 404"));

    assert!(memory.document().is_none());
}

#[tokio::test]
async fn test_summarize_then_ask_flow() {
    let (completer, _memory, app) = setup();
    completer.push_response(JUDGMENT_OK);
    completer.push_response("The article explains Rust's ownership rules.");
    completer.push_response("Rust Ownership");

    let server = serve_page("/article", ARTICLE_PAGE).await;
    let url = format!("{}/article", server.uri());

    let response = app.clone().oneshot(summarize_request(&url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // With a document in place, /ask answers instead of refusing
    completer.push_response("They are checked at compile time.");
    let ask = Request::builder()
        .method(Method::POST)
        .uri("/ask")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "question": "When are the rules checked?" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(ask).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["answer"], "They are checked at compile time.");

    let prompts = completer.prompts();
    assert!(prompts[3].contains("The article explains Rust's ownership rules."));
}

#[tokio::test]
async fn test_summarize_surfaces_model_failure() {
    let (completer, memory, app) = setup();
    completer.push_response(JUDGMENT_OK);
    completer.push_error(CompletionError::Api {
        status: 500,
        message: "internal error".to_string(),
    });

    let server = serve_page("/article", ARTICLE_PAGE).await;
    let url = format!("{}/article", server.uri());

    let response = app.oneshot(summarize_request(&url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error_type"], "summarize_error");
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error summarizing webpage:"));

    assert!(memory.document().is_none());
}
