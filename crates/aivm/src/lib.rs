//! Client crate for the AIVM confidential-computing inference service.
//!
//! The service performs model prediction on encrypted input so that it
//! never observes plaintext. This crate defines the capability trait
//! [`SecureInference`] consumed by the API handlers, plus the HTTP
//! implementation [`AivmClient`] that talks to an AIVM devnet node.
//!
//! Encrypted payloads are opaque: they are produced by the service's
//! encryption endpoints and handed back to its prediction endpoint
//! without ever being interpreted here.

pub mod client;
pub mod error;
pub mod inference;

pub use client::AivmClient;
pub use error::AivmError;
pub use inference::{EncryptedInput, ModelType, SecureInference};
