//! Turns a raw response into the result view shown to the user.

use super::types::{PreviewFormat, ResultView};

/// Preview length in characters, not bytes.
pub const PREVIEW_LIMIT: usize = 1000;

/// First 1000 characters of the body, tagged `json` when the trimmed body
/// starts with `{` and `markup` otherwise.
pub fn body_preview(body: &str) -> (String, PreviewFormat) {
    let format = if body.trim_start().starts_with('{') {
        PreviewFormat::Json
    } else {
        PreviewFormat::Markup
    };
    (body.chars().take(PREVIEW_LIMIT).collect(), format)
}

/// Status code rendered verbatim, "N/A" when no response was obtained.
pub fn status_display(status: Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "N/A".to_string(),
    }
}

pub fn present(status: Option<u16>, cost: String, body: &str) -> ResultView {
    let (body_preview, preview_format) = body_preview(body);
    ResultView {
        status,
        status_display: status_display(status),
        cost,
        body_preview,
        preview_format,
    }
}
