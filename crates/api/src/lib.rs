//! meddx API server library.
//!
//! Exposes the core building blocks (config, state, error handling,
//! routes, model bootstrap) so integration tests and the binary
//! entrypoint can both access them.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod uploads;
