use axum::{
    routing::{get, post},
    Router,
    body::Bytes,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tracing::info;

use crate::error::{Result, AppError};
use crate::api::models::{HealthResponse, PreprocessRequest, PreprocessResponse};
use crate::keyword_log::LogRecord;
use crate::keywords::extract_keywords;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/preprocess", post(preprocess_handler))
        .route("/health", get(health_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

// Decoded by hand so an undecodable body still answers with `{"error": ...}`
async fn preprocess_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PreprocessResponse>> {
    let req: PreprocessRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidBody(e.to_string()))?;

    let content = req.content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }

    let start_time = std::time::Instant::now();
    let response = process_preprocess_request(&state, content).await?;
    info!(
        keywords = response.keywords.len(),
        elapsed = ?start_time.elapsed(),
        "preprocessed content"
    );

    Ok(Json(response))
}

async fn process_preprocess_request(state: &AppState, content: String) -> Result<PreprocessResponse> {
    info!(chars = content.chars().count(), "extracting keywords");
    let keywords = extract_keywords(state.tagger.as_ref(), &content).await?;

    let record = LogRecord::new(content, keywords);
    state.log.append(&record).await?;

    Ok(PreprocessResponse {
        keywords: record.keywords,
    })
}
