use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
    Json,
};

use crate::check::CheckRequest;
use crate::error::AppError;
use crate::export;

pub async fn export_script(Json(request): Json<CheckRequest>) -> Result<Response, AppError> {
    let filename = export::script_filename(&request.provider);
    let script = export::render_script(&request)?;

    tracing::debug!(%filename, "Exporting script");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, export::MIME_TYPE)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(script))
        .map_err(|e| AppError::Internal(e.to_string()))
}
