use crate::provider::ProviderConfig;
use serde::{Deserialize, Serialize};

/// Incoming check submission from the frontend. The map-valued fields
/// (headers, cookies, params, body) arrive as free text and go through the
/// loose parser; the provider fields sit flattened next to them, selected
/// by the `provider` tag.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: String,
    #[serde(default)]
    pub cookies: String,
    #[serde(default)]
    pub params: String,
    #[serde(default)]
    pub body: String,
    #[serde(flatten)]
    pub provider: ProviderConfig,
}

fn default_method() -> String {
    "GET".to_string()
}

/// One submission's result: the status code, the provider-reported cost and
/// a truncated body preview. Discarded after render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub status_display: String,
    pub cost: String,
    pub body_preview: String,
    pub preview_format: PreviewFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    Json,
    Markup,
}

/// Full check response envelope.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResultView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorData>,
}

#[derive(Debug, Serialize)]
pub struct ErrorData {
    pub message: String,
    pub code: String,
}

impl CheckResponse {
    pub fn success(data: ResultView, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            warnings,
            error: None,
        }
    }

    /// Failure envelope. Field warnings collected before the failure still
    /// surface alongside the error.
    pub fn error(message: String, code: String, warnings: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            warnings,
            error: Some(ErrorData { message, code }),
        }
    }
}
