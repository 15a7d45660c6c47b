use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};

use crate::memory::CurrentDocument;
use crate::summarizer::WebpageSummarizer;
use crate::version;

use super::{
    AnswerResponse, ApiError, ClearResponse, HealthResponse, QuestionRequest, SummarizeRequest,
    SummaryResponse,
};

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<WebpageSummarizer>,
}

impl AppState {
    pub fn new(summarizer: Arc<WebpageSummarizer>) -> Self {
        Self { summarizer }
    }
}

/// Build the router with all routes and CORS applied
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Summarization endpoint
        .route("/summarize", post(summarize_handler))
        // Question answering endpoint
        .route("/ask", post(ask_handler))
        // Current document endpoint
        .route("/current", get(current_handler))
        // Memory reset endpoint
        .route("/clear", post(clear_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(
    host: &str,
    port: u16,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(state);

    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    axum::response::Json(HealthResponse {
        status: "healthy".to_string(),
        version: version::VERSION_NUMBER.to_string(),
    })
}

async fn summarize_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<axum::response::Json<SummaryResponse>, ApiErrorResponse> {
    match state.summarizer.summarize_url(&request.url).await {
        Ok(document) => Ok(axum::response::Json(SummaryResponse {
            url: document.url,
            summary: document.summary,
            main_topic: document.main_topic,
        })),
        Err(e) => {
            tracing::warn!("Summarize failed for {}: {}", request.url, e);
            Err(ApiErrorResponse(ApiError::SummarizeFailed(e.to_string())))
        }
    }
}

async fn ask_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuestionRequest>,
) -> Result<axum::response::Json<AnswerResponse>, ApiErrorResponse> {
    request.validate().map_err(ApiErrorResponse)?;

    if state.summarizer.current_document().is_none() {
        return Err(ApiErrorResponse(ApiError::MissingDocument));
    }

    let question = request.question.trim().to_string();
    let answer = state.summarizer.answer_question(&question).await;

    Ok(axum::response::Json(AnswerResponse { question, answer }))
}

async fn current_handler(
    State(state): State<Arc<AppState>>,
) -> axum::response::Json<Option<CurrentDocument>> {
    axum::response::Json(state.summarizer.current_document())
}

async fn clear_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.summarizer.clear_memory();
    tracing::info!("Memory cleared");

    axum::response::Json(ClearResponse {
        status: "success".to_string(),
        message: "Memory cleared successfully".to_string(),
    })
}

// Error response wrapper
pub struct ApiErrorResponse(pub ApiError);

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let error_response = self.0.to_response();

        (status, axum::response::Json(error_response)).into_response()
    }
}
