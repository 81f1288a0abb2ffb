use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    #[error("Invalid proxy: {0}")]
    InvalidProxy(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code for the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::RequestFailed(e) => {
                if e.is_timeout() {
                    "TIMEOUT"
                } else if e.is_connect() {
                    "CONNECTION_FAILED"
                } else if e.is_request() {
                    "REQUEST_ERROR"
                } else {
                    "REQUEST_FAILED"
                }
            }
            AppError::InvalidUrl(_) => "INVALID_URL",
            AppError::InvalidMethod(_) => "INVALID_METHOD",
            AppError::InvalidProxy(_) => "INVALID_PROXY",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::InvalidUrl(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::RequestFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidUrl(_) | AppError::InvalidMethod(_) | AppError::InvalidProxy(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "message": self.to_string(),
                "code": self.code(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_error_codes() {
        assert_eq!(AppError::InvalidUrl("x".into()).code(), "INVALID_URL");
        assert_eq!(AppError::InvalidMethod("PUT".into()).code(), "INVALID_METHOD");
        assert_eq!(AppError::InvalidProxy("x".into()).code(), "INVALID_PROXY");
        assert_eq!(AppError::Internal("x".into()).code(), "INTERNAL_ERROR");
    }
}
