//! HTTP API for MindLens
//!
//! Endpoints:
//! - POST /analyze - Analyze one reflection
//! - GET /moods - Supported mood labels
//! - GET /health - Health check

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::core::InsightEngine;
use crate::error::InsightError;
use crate::types::{Insight, Mood};

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_enabled: bool,
}

/// One supported mood
#[derive(Debug, Serialize)]
pub struct MoodInfo {
    pub label: Mood,
    pub emoji: &'static str,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for InsightError {
    fn into_response(self) -> Response {
        let status = match self {
            InsightError::Config(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the API router around a shared engine
pub fn create_router(engine: Arc<InsightEngine>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/moods", get(moods))
        .route("/analyze", post(analyze))
        .with_state(engine)
}

/// Health check endpoint
async fn health(State(engine): State<Arc<InsightEngine>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        model_enabled: engine.model_enabled(),
    })
}

/// Supported moods in tie-break order
async fn moods() -> Json<Vec<MoodInfo>> {
    Json(
        Mood::ALL
            .iter()
            .map(|mood| MoodInfo {
                label: *mood,
                emoji: mood.emoji(),
            })
            .collect(),
    )
}

/// Analyze one reflection
async fn analyze(
    State(engine): State<Arc<InsightEngine>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Insight>, InsightError> {
    let insight = engine.analyze_guarded(req.text).await?;
    Ok(Json(insight))
}

/// Run the API server
pub async fn run_server(addr: &str, engine: Arc<InsightEngine>) -> Result<(), Box<dyn std::error::Error>> {
    let model_enabled = engine.model_enabled();
    let router = create_router(engine);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, model_enabled, "MindLens API listening");
    info!("  POST /analyze - Analyze a reflection");
    info!("  GET  /moods   - Supported moods");
    info!("  GET  /health  - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
