//! Model bootstrap: register the two classifier artifacts with AIVM
//! before the server starts accepting traffic.
//!
//! Registration is idempotent across process restarts: each artifact is
//! attempted independently, and a failure (including "already
//! registered") is logged and swallowed so startup always proceeds.

use meddx_aivm::{ModelType, SecureInference};
use meddx_core::labels::{DIAGNOSIS_MODEL, IMAGE_MODEL};

use crate::config::ServerConfig;

/// Register both model artifacts, continuing past failures.
pub async fn register_models(inference: &dyn SecureInference, config: &ServerConfig) {
    let registrations = [
        (
            config.diagnosis_model_path.as_path(),
            DIAGNOSIS_MODEL,
            ModelType::BertTiny,
        ),
        (
            config.image_model_path.as_path(),
            IMAGE_MODEL,
            ModelType::LeNet5,
        ),
    ];

    for (artifact, model_name, model_type) in registrations {
        match inference.register_model(artifact, model_name, model_type).await {
            Ok(()) => {
                tracing::info!(model_name, "Model artifact registered");
            }
            Err(err) => {
                // Benign when the model is already registered from a
                // previous run; anything else will resurface on the
                // first prediction against it.
                tracing::warn!(model_name, error = %err, "Model registration failed, continuing");
            }
        }
    }
}
