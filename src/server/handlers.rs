// HTTP request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::pipeline::{ResolutionPipeline, NO_MESSAGE_ERROR};
use crate::responder::MEDITATION_VIDEOS;

/// Create the application router
pub fn create_router(pipeline: Arc<ResolutionPipeline>) -> Router {
    Router::new()
        .route("/v1/respond", post(handle_respond))
        .route("/v1/respond/json", post(handle_respond_json))
        .route("/v1/emotion", post(handle_emotion))
        .route("/v1/meditation-videos", get(list_meditation_videos))
        .route("/health", get(health_check))
        .with_state(pipeline)
}

/// Request body for the message endpoints
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    #[serde(default)]
    pub message: String,
}

/// Response body for /v1/respond
#[derive(Debug, Serialize, Deserialize)]
pub struct RespondResponse {
    pub response: String,
    pub analysis: String,
}

/// Handle POST /v1/respond - plain entry point
async fn handle_respond(
    State(pipeline): State<Arc<ResolutionPipeline>>,
    Json(request): Json<RespondRequest>,
) -> Json<RespondResponse> {
    let (response, analysis) = pipeline.respond(&request.message).await;
    Json(RespondResponse { response, analysis })
}

/// Handle POST /v1/respond/json - JSON entry point
async fn handle_respond_json(
    State(pipeline): State<Arc<ResolutionPipeline>>,
    Json(request): Json<RespondRequest>,
) -> Response {
    let body = pipeline.respond_json(&request.message).await;
    json_with_status(body)
}

/// Handle POST /v1/emotion - classification only
async fn handle_emotion(
    State(pipeline): State<Arc<ResolutionPipeline>>,
    Json(request): Json<RespondRequest>,
) -> Response {
    let body = pipeline.detect_json(&request.message).await;
    json_with_status(body)
}

/// Handle GET /v1/meditation-videos
async fn list_meditation_videos() -> impl IntoResponse {
    Json(serde_json::json!({
        "videos": MEDITATION_VIDEOS,
        "count": MEDITATION_VIDEOS.len(),
    }))
}

/// 400 for the no-message error, 200 otherwise
fn json_with_status(body: serde_json::Value) -> Response {
    let status = if body.get("error").and_then(|e| e.as_str()) == Some(NO_MESSAGE_ERROR) {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    (status, Json(body)).into_response()
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
