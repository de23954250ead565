//! Handlers for the diagnosis endpoints.
//!
//! Endpoints:
//! - POST /api/dx/send_text    -- text-symptom classification
//! - POST /api/dx/send_picture -- dementia image classification
//!
//! Both are thin orchestrators: parse the payload, delegate to the
//! secure inference service, map the raw output through the fixed
//! label taxonomies, serialize JSON back. Inference failures are
//! caught here and converted to each endpoint's fixed error message;
//! internals are logged, never exposed.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use meddx_core::labels::{DIAGNOSIS_MODEL, IMAGE_MODEL};
use meddx_core::scoring::{classify_image_output, rank_symptom_predictions, Prediction};
use meddx_core::tensor::prepare_image;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads;

/// Fixed error message for text-diagnosis inference failures.
const TEXT_INFERENCE_ERROR: &str = "Error performing inference with AIVM";

/// Fixed error message for image-diagnosis failures (missing field and
/// inference failure alike).
const PICTURE_ERROR: &str = "Error getting model prediction";

/// Request body for the text-diagnosis endpoint. The field is optional;
/// a missing `symptoms` key means an empty query.
#[derive(Debug, Default, Deserialize)]
pub struct SymptomRequest {
    #[serde(default)]
    pub symptoms: String,
}

/// Response body for the text-diagnosis endpoint: the top candidate
/// diagnoses, highest probability first.
#[derive(Debug, Serialize)]
pub struct PredictionsResponse {
    pub predictions: Vec<Prediction>,
}

/// Response body for the image-diagnosis endpoint.
#[derive(Debug, Serialize)]
pub struct PictureResponse {
    pub prediction: &'static str,
}

// ── Text diagnosis ───────────────────────────────────────────────────

/// POST /api/dx/send_text
///
/// Encrypt the symptom text, run the symptom classifier, and return the
/// top four candidate diagnoses. Any failure along the way becomes a
/// 400 with a fixed message.
pub async fn send_text(
    State(state): State<AppState>,
    body: Option<Json<SymptomRequest>>,
) -> Response {
    let Json(request) = body.unwrap_or_default();

    match diagnose_text(&state, &request.symptoms).await {
        Ok(predictions) => (StatusCode::OK, Json(PredictionsResponse { predictions })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Text diagnosis failed");
            (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse {
                    message: TEXT_INFERENCE_ERROR,
                }),
            )
                .into_response()
        }
    }
}

/// Full text-diagnosis pipeline: encrypt -> predict -> softmax-rank.
async fn diagnose_text(state: &AppState, symptoms: &str) -> AppResult<Vec<Prediction>> {
    let encrypted = state.inference.encrypt_text(symptoms).await?;
    let raw = state.inference.predict(&encrypted, DIAGNOSIS_MODEL).await?;
    Ok(rank_symptom_predictions(&raw)?)
}

// ── Image diagnosis ──────────────────────────────────────────────────

/// POST /api/dx/send_picture
///
/// Accept a multipart upload with field `image`, store it under a
/// request-scoped directory, classify it, and return the predicted
/// label. The stored file is removed before returning, success or
/// failure.
///
/// A missing `image` field is a 400. An inference failure is reported
/// with status 200 and the same fixed message -- inconsistent with the
/// text endpoint, but clients depend on the current behaviour (see
/// DESIGN.md).
pub async fn send_picture(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let Some((filename, bytes)) = read_image_field(&mut multipart).await else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse {
                message: PICTURE_ERROR,
            }),
        )
            .into_response());
    };

    let upload = uploads::store(&state.config.upload_dir, &filename, &bytes).await?;

    // Run the pipeline first, clean up unconditionally, then report.
    let result = classify_picture(&state, upload.path()).await;
    upload.remove().await;

    match result {
        Ok(prediction) => {
            Ok((StatusCode::OK, Json(PictureResponse { prediction })).into_response())
        }
        Err(err) => {
            tracing::error!(error = %err, "Image diagnosis failed");
            Ok((
                StatusCode::OK,
                Json(MessageResponse {
                    message: PICTURE_ERROR,
                }),
            )
                .into_response())
        }
    }
}

/// Pull the `image` field out of the multipart body.
///
/// Returns `None` when the field is absent or the body cannot be read;
/// both report the same fixed-message 400 to the client, with the
/// underlying cause only logged.
async fn read_image_field(multipart: &mut Multipart) -> Option<(String, Vec<u8>)> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("image") => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                match field.bytes().await {
                    Ok(bytes) => return Some((filename, bytes.to_vec())),
                    Err(err) => {
                        tracing::warn!(error = %err, "Failed to read image field");
                        return None;
                    }
                }
            }
            Ok(Some(_)) => continue,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "Malformed multipart body");
                return None;
            }
        }
    }
}

/// Full image-diagnosis pipeline: decode -> tensor -> encrypt ->
/// predict -> arg-max label.
async fn classify_picture(state: &AppState, path: &Path) -> AppResult<&'static str> {
    let bytes = tokio::fs::read(path).await?;
    let tensor = prepare_image(&bytes)?;
    let encrypted = state.inference.encrypt_tensor(&tensor).await?;
    let raw = state.inference.predict(&encrypted, IMAGE_MODEL).await?;
    Ok(classify_image_output(&raw)?)
}
