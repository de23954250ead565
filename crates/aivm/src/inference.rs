//! The capability interface the API handlers depend on.
//!
//! Handlers hold an `Arc<dyn SecureInference>` so integration tests can
//! substitute a deterministic fake for the real AIVM node.

use std::path::Path;

use async_trait::async_trait;
use meddx_core::tensor::ImageTensor;

use crate::error::AivmError;

/// The kind of model an artifact is registered as.
///
/// AIVM needs this to pick the matching client-side encryption scheme:
/// text models take encrypted token sequences, image models take
/// encrypted tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    /// Tiny BERT text classifier.
    BertTiny,
    /// LeNet-5 style convolutional image classifier.
    LeNet5,
}

impl ModelType {
    /// Wire name used by the AIVM API.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::BertTiny => "BertTiny",
            ModelType::LeNet5 => "LeNet5",
        }
    }
}

/// An encrypted inference input.
///
/// Produced by the encryption operations and consumed by
/// [`SecureInference::predict`]. The inner payload is whatever the
/// service handed back; nothing in this codebase inspects it.
#[derive(Debug, Clone)]
pub struct EncryptedInput(serde_json::Value);

impl EncryptedInput {
    /// Wrap a payload received from the encryption endpoint.
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// The opaque payload, for shipping back to the service.
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Operations the diagnosis handlers need from the secure inference
/// service: artifact registration, input encryption, and prediction.
#[async_trait]
pub trait SecureInference: Send + Sync {
    /// Register a model artifact under `model_name`.
    ///
    /// Registration may fail benignly when the model already exists;
    /// callers decide whether that matters.
    async fn register_model(
        &self,
        artifact: &Path,
        model_name: &str,
        model_type: ModelType,
    ) -> Result<(), AivmError>;

    /// Tokenize and encrypt free text for a text-model prediction.
    async fn encrypt_text(&self, text: &str) -> Result<EncryptedInput, AivmError>;

    /// Encrypt a prepared image tensor for an image-model prediction.
    async fn encrypt_tensor(&self, tensor: &ImageTensor) -> Result<EncryptedInput, AivmError>;

    /// Run prediction over an encrypted input, returning the raw
    /// (unnormalized) output vector.
    async fn predict(
        &self,
        input: &EncryptedInput,
        model_name: &str,
    ) -> Result<Vec<f32>, AivmError>;
}
