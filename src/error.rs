use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("내용이 비어있습니다.")]
    EmptyContent,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Noun tagger error: {0}")]
    Tagger(String),

    #[error("Failed to write keyword log: {0}")]
    Log(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyContent => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(_)
            | AppError::Tagger(_)
            | AppError::Log(_)
            | AppError::Serialization(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Tagger(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Log(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_content_maps_to_bad_request() {
        assert_eq!(AppError::EmptyContent.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn processing_errors_map_to_internal_error() {
        for err in [
            AppError::InvalidBody("expected value".into()),
            AppError::Tagger("connection refused".into()),
            AppError::Log("permission denied".into()),
            AppError::Serialization("key must be a string".into()),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn io_errors_become_log_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only filesystem");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Log(_)));
        assert!(err.to_string().contains("read-only filesystem"));
    }
}
