//! HTTP client for an AIVM devnet node.
//!
//! Wraps the node's REST endpoints (model upload, tokenization, input
//! encryption, prediction) using [`reqwest`] and implements
//! [`SecureInference`] on top of them.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use meddx_core::tensor::ImageTensor;

use crate::error::AivmError;
use crate::inference::{EncryptedInput, ModelType, SecureInference};

/// HTTP client for a single AIVM node.
pub struct AivmClient {
    client: reqwest::Client,
    base_url: String,
}

/// Response from the `/api/tokenize` endpoint.
#[derive(Debug, Deserialize)]
struct TokenizeResponse {
    tokens: serde_json::Value,
}

/// Response from the `/api/encrypt` endpoints. The `payload` is opaque
/// ciphertext material; it is never interpreted client-side.
#[derive(Debug, Deserialize)]
struct EncryptResponse {
    payload: serde_json::Value,
}

/// Response from the `/api/predict` endpoint.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    output: Vec<f32>,
}

impl AivmClient {
    /// Create a new client for an AIVM node.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:50050`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`], so one
    /// connection pool serves every collaborator.
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`AivmError::Api`] with the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AivmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AivmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AivmError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl SecureInference for AivmClient {
    /// Upload a model artifact via `POST /api/models/upload` (multipart).
    async fn register_model(
        &self,
        artifact: &Path,
        model_name: &str,
        model_type: ModelType,
    ) -> Result<(), AivmError> {
        let bytes = tokio::fs::read(artifact).await?;
        let filename = artifact
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "model.bin".to_string());

        let form = reqwest::multipart::Form::new()
            .text("model_name", model_name.to_string())
            .text("model_type", model_type.as_str())
            .part("file", reqwest::multipart::Part::bytes(bytes).file_name(filename));

        let response = self
            .client
            .post(format!("{}/api/models/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Self::ensure_success(response).await?;

        tracing::info!(model_name, model_type = model_type.as_str(), "Model registered with AIVM");
        Ok(())
    }

    /// Tokenize via `POST /api/tokenize`, then encrypt the token
    /// sequence via `POST /api/encrypt/tokens`.
    async fn encrypt_text(&self, text: &str) -> Result<EncryptedInput, AivmError> {
        let response = self
            .client
            .post(format!("{}/api/tokenize", self.base_url))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        let tokenized: TokenizeResponse = Self::parse_response(response).await?;

        let response = self
            .client
            .post(format!("{}/api/encrypt/tokens", self.base_url))
            .json(&serde_json::json!({ "tokens": tokenized.tokens }))
            .send()
            .await?;
        let encrypted: EncryptResponse = Self::parse_response(response).await?;

        Ok(EncryptedInput::new(encrypted.payload))
    }

    /// Encrypt a prepared image tensor via `POST /api/encrypt/tensor`.
    async fn encrypt_tensor(&self, tensor: &ImageTensor) -> Result<EncryptedInput, AivmError> {
        let response = self
            .client
            .post(format!("{}/api/encrypt/tensor", self.base_url))
            .json(tensor)
            .send()
            .await?;
        let encrypted: EncryptResponse = Self::parse_response(response).await?;

        Ok(EncryptedInput::new(encrypted.payload))
    }

    /// Run prediction via `POST /api/predict`.
    async fn predict(
        &self,
        input: &EncryptedInput,
        model_name: &str,
    ) -> Result<Vec<f32>, AivmError> {
        let body = serde_json::json!({
            "model_name": model_name,
            "input": input.payload(),
        });

        let response = self
            .client
            .post(format!("{}/api/predict", self.base_url))
            .json(&body)
            .send()
            .await?;
        let predicted: PredictResponse = Self::parse_response(response).await?;

        if predicted.output.is_empty() {
            return Err(AivmError::Malformed("empty output vector".to_string()));
        }

        Ok(predicted.output)
    }
}
