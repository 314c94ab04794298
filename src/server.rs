//! HTTP server: axum router and handlers.

use crate::config::Config;
use crate::error::InvalidInput;
use crate::lexicon::{title_case, Label, Lexicon};
use crate::processor::{AnalysisResult, Processor, HINGLISH_EXAMPLES, MARATHLISH_EXAMPLES};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// State shared by all handlers. Read-only after startup.
pub struct AppState {
    pub processor: Processor<'static>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(lexicon: &'static Lexicon, max_text_chars: usize) -> Self {
        Self {
            processor: Processor::new(lexicon).with_max_chars(max_text_chars),
            started_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
struct IndexResponse {
    message: &'static str,
    status: &'static str,
    version: &'static str,
    started_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExampleResult {
    pub input: String,
    pub output: String,
    #[serde(with = "title_case")]
    pub main_language: Label,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExampleResults {
    pub test_results: Vec<ExampleResult>,
}

impl IntoResponse for InvalidInput {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/process", post(process))
        .route("/api/test", get(run_examples))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until the process is stopped.
pub async fn serve(config: &Config, lexicon: &'static Lexicon) -> Result<()> {
    let state = Arc::new(AppState::new(lexicon, config.max_text_chars));
    let app = router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Listening on {}", address);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(IndexResponse {
        message: "Code-Mixed Language Processor",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
    })
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn process(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, InvalidInput> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        InvalidInput::MissingBody
    })?;

    // `{}`, `[]`, `null` and scalars carry no data to look a `text` up in
    if !body.as_object().is_some_and(|fields| !fields.is_empty()) {
        warn!("Request body is not a JSON object with fields: {}", body);
        return Err(InvalidInput::MissingBody);
    }

    let request: ProcessRequest = serde_json::from_value(body).map_err(|e| {
        warn!("Request body has no usable text: {}", e);
        InvalidInput::EmptyText
    })?;

    let result = state.processor.process(&request.text).inspect_err(|e| {
        warn!("Invalid input: {}", e);
    })?;

    info!(
        "Processed {} words, main language {}",
        result.word_count, result.main_language
    );
    Ok(Json(result))
}

async fn run_examples(State(state): State<Arc<AppState>>) -> Json<ExampleResults> {
    let test_results = HINGLISH_EXAMPLES
        .iter()
        .chain(MARATHLISH_EXAMPLES)
        .filter_map(|input| state.processor.process(input).ok())
        .map(|result| ExampleResult {
            input: result.original_text,
            output: result.converted_text,
            main_language: result.main_language,
        })
        .collect();

    Json(ExampleResults { test_results })
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
