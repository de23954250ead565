pub mod root;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dx/send_text     POST  text-symptom diagnosis
/// /dx/send_picture  POST  image diagnosis (multipart)
/// /translation      POST  text translation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/dx/send_text", post(handlers::diagnosis::send_text))
        .route("/dx/send_picture", post(handlers::diagnosis::send_picture))
        .route("/translation", post(handlers::translation::translate))
}
