#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The model returned an output vector whose length does not match
    /// the label taxonomy it is paired with.
    #[error("Model output shape mismatch for {model}: expected {expected}, got {actual}")]
    OutputShape {
        model: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The uploaded image could not be decoded or transformed.
    #[error("Image processing failed: {0}")]
    Image(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<image::ImageError> for CoreError {
    fn from(err: image::ImageError) -> Self {
        CoreError::Image(err.to_string())
    }
}
