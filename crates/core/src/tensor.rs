//! Image-to-tensor preparation for the dementia classifier.
//!
//! Mirrors the preprocessing the image model was trained with: resize to
//! 28x28, convert to single-channel grayscale, then normalize with mean
//! 0.5 and scale 1.0 (pixel/255 shifted to be centered at zero). The
//! result is shipped to the inference service as a batch-of-1 tensor.

use image::imageops::FilterType;
use serde::Serialize;

use crate::error::CoreError;

/// Side length of the model's square input, in pixels.
pub const IMAGE_SIDE: u32 = 28;

/// Tensor shape expected by the image classifier: batch, channel,
/// height, width.
pub const TENSOR_SHAPE: [usize; 4] = [1, 1, IMAGE_SIDE as usize, IMAGE_SIDE as usize];

/// A normalized single-channel image tensor, row-major, shape
/// [`TENSOR_SHAPE`].
#[derive(Debug, Clone, Serialize)]
pub struct ImageTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl ImageTensor {
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

/// Decode raw image bytes and prepare them for inference.
///
/// Pipeline: decode -> resize to 28x28 (bilinear) -> grayscale ->
/// normalize each pixel as `p/255 - 0.5`.
pub fn prepare_image(bytes: &[u8]) -> Result<ImageTensor, CoreError> {
    let decoded = image::load_from_memory(bytes)?;

    let resized = decoded.resize_exact(IMAGE_SIDE, IMAGE_SIDE, FilterType::Triangle);
    let gray = resized.to_luma8();

    let data: Vec<f32> = gray
        .pixels()
        .map(|p| f32::from(p.0[0]) / 255.0 - 0.5)
        .collect();

    debug_assert_eq!(data.len(), TENSOR_SHAPE.iter().product::<usize>());

    Ok(ImageTensor {
        shape: TENSOR_SHAPE,
        data,
    })
}
