//! Handler for the translation endpoint.
//!
//! Endpoint:
//! - POST /api/translation
//!
//! Delegates to the external translation service and returns its output
//! verbatim. No input validation, no length limits: a collaborator
//! failure surfaces as the generic 500 from [`AppError`].

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for the translation endpoint. The field is optional; a
/// missing `input_text` key means an empty input.
#[derive(Debug, Default, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub input_text: String,
}

/// Response body for the translation endpoint.
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}

/// POST /api/translation
pub async fn translate(
    State(state): State<AppState>,
    body: Option<Json<TranslationRequest>>,
) -> AppResult<Json<TranslationResponse>> {
    let Json(request) = body.unwrap_or_default();

    let translated_text = state.translator.translate(&request.input_text).await?;

    Ok(Json(TranslationResponse { translated_text }))
}
