use axum::Json;

use crate::check::{run_check, CheckRequest, CheckResponse};

pub async fn check_request(Json(request): Json<CheckRequest>) -> Json<CheckResponse> {
    tracing::debug!(
        method = %request.method,
        url = %request.url,
        provider = request.provider.display_name(),
        "Running credit check"
    );

    let response = run_check(request).await;

    if response.success {
        tracing::debug!("Check succeeded");
    } else if let Some(ref error) = response.error {
        tracing::warn!(code = %error.code, message = %error.message, "Check failed");
    }

    Json(response)
}
