//! HTTP exception mapping.
//!
//! Handlers return [`ApiError`] and let its `IntoResponse` implementation
//! pick the status code and JSON body.

pub mod http;

pub use http::{ApiError, Operation};
