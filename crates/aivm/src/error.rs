/// Errors from the AIVM client layer.
#[derive(Debug, thiserror::Error)]
pub enum AivmError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// AIVM returned a non-2xx status code.
    #[error("AIVM API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The model artifact could not be read from disk.
    #[error("Failed to read model artifact: {0}")]
    Artifact(#[from] std::io::Error),

    /// AIVM returned a response this client could not make sense of.
    #[error("Malformed AIVM response: {0}")]
    Malformed(String),
}
