use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use notice_mt::{
    SAMPLE_PAIRS, SamplePair, TranslationMetadata, TranslationRequest, TranslationService,
    word_count,
};

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub translation: String,
    pub confidence: f64,
    pub metadata: TranslationMetadata,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub device: String,
}

#[derive(Serialize)]
pub struct ExamplesResponse {
    pub examples: &'static [SamplePair],
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, detail: String) -> ApiError {
    (status, Json(ErrorResponse { detail }))
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TranslationService>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health_check))
        .route("/translate", post(translate))
        .route("/examples", get(get_examples))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = state.service.backend();
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: backend.model_name().to_string(),
        device: backend.device().to_string(),
    })
}

async fn get_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: SAMPLE_PAIRS,
    })
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let preview: String = request.text.chars().take(50).collect();
    info!("Translation request: {}...", preview);

    let result = state.service.translate(&request).await;

    if let Some(err) = result.error() {
        // Blank text is the caller's mistake; anything else came from the backend
        let status = if word_count(&request.text) == 0 {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        return Err(api_error(status, format!("Translation error: {}", err)));
    }

    let preview: String = result.translation.chars().take(50).collect();
    info!("Translation success: {}...", preview);

    Ok(Json(TranslateResponse {
        success: true,
        translation: result.translation,
        confidence: result.confidence,
        metadata: result.metadata,
    }))
}
