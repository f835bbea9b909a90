use super::types::{AskResponse, ErrorResponse};
use crate::{
    Error,
    gemini::{GeminiClient, GenerateRequest, KNOWN_MODELS},
    image::{self, UploadedImage},
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<dyn GeminiClient>,
    pub default_model: String,
}

/// The single-page form.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

pub async fn ask(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut model: Option<String> = None;
    let mut question: Option<String> = None;
    let mut upload: Option<UploadedImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed_upload)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("model") => model = Some(field.text().await.map_err(malformed_upload)?),
            Some("question") => question = Some(field.text().await.map_err(malformed_upload)?),
            Some("image") => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(malformed_upload)?.to_vec();
                upload = Some(UploadedImage {
                    data,
                    mime_type,
                    file_name,
                });
            }
            _ => {}
        }
    }

    let request_id = Uuid::new_v4();
    let model = model.unwrap_or_else(|| state.default_model.clone());
    let question = question.unwrap_or_default();

    if !KNOWN_MODELS.contains(&model.as_str()) {
        // Passed through unvalidated; the backend decides acceptance.
        warn!("Request {} uses unknown model identifier: {}", request_id, model);
    }

    info!(
        "Received ask request {} for model {} ({} byte image)",
        request_id,
        model,
        upload.as_ref().map(|u| u.data.len()).unwrap_or(0)
    );

    let result = match image::normalize(upload) {
        Ok(part) => {
            state
                .gemini
                .generate_content(GenerateRequest::new(model, question, part))
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => {
            info!("Request {} answered successfully", request_id);
            Ok(Json(AskResponse { output }))
        }
        Err(e) => {
            error!("Request {} failed: {}", request_id, e);
            Err(error_response(&e))
        }
    }
}

/// Boundary adapter: maps every error kind the core can surface to a single
/// user-facing message and status. Exhaustive so new kinds cannot slip
/// through untyped.
pub fn error_response(error: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match error {
        Error::MissingInput => StatusCode::BAD_REQUEST,
        Error::Inference(_) => StatusCode::BAD_GATEWAY,
        Error::Config(_) | Error::Yaml(_) | Error::Io(_) | Error::AddrParse(_)
        | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

fn malformed_upload(
    e: axum::extract::multipart::MultipartError,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: format!("Malformed upload: {e}"),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_response_missing_input_is_bad_request() {
        let (status, body) = error_response(&Error::MissingInput);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "No image was uploaded");
    }

    #[test]
    fn test_error_response_inference_is_bad_gateway() {
        let (status, body) = error_response(&Error::inference("quota exceeded"));

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error, "Inference error: quota exceeded");
    }

    #[test]
    fn test_error_response_other_kinds_are_internal() {
        let (status, _) = error_response(&Error::internal("boom"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = error_response(&Error::config("bad config"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
