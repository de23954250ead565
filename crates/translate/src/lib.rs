//! Client crate for the external translation collaborator.
//!
//! The translation model runs as its own service; this crate only
//! defines the [`Translator`] capability trait and an HTTP
//! implementation. Input text is passed through verbatim, output is
//! returned verbatim.

use async_trait::async_trait;
use serde::Deserialize;

/// Errors from the translation client.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The translation service returned a non-2xx status code.
    #[error("Translation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// The one operation the translation handler needs.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text`, returning the service's output unmodified.
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

/// HTTP client for the translation service.
pub struct HttpTranslator {
    client: reqwest::Client,
    base_url: String,
}

/// Response from the translation service's `/translate` endpoint.
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated_text: String,
}

impl HttpTranslator {
    /// Create a new client for the translation service.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8090`.
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
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TranslateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranslateResponse = response.json().await?;
        Ok(parsed.translated_text)
    }
}
