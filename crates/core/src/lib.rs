//! Domain logic for the meddx diagnosis backends.
//!
//! Pure, synchronous building blocks shared by the API server: the fixed
//! label taxonomies, prediction scoring (softmax, arg-max, top-k ranking),
//! and image-to-tensor preparation for the secure image classifier.
//! No I/O happens here; everything is unit-testable in isolation.

pub mod error;
pub mod labels;
pub mod scoring;
pub mod tensor;
