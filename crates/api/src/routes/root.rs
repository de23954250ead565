use axum::{routing::get, Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// GET / -- hello route the frontend uses as a reachability probe.
async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello world!",
    })
}

/// Mount the root route (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(hello))
}
