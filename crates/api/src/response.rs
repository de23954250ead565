use serde::Serialize;

/// Fixed-text JSON body used by the root route and by the diagnosis
/// handlers' error responses: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
