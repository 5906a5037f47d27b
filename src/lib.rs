//! Service result types
//!
//! A small cross-cutting library that standardizes how service-layer
//! operations report outcomes: success with an optional value, or failure with
//! a status code, an optional message, and an optional causal error.

pub mod result;

// Re-exports
pub use result::{InvalidStatusCode, ResultStatusCode, ServiceResult, SourceError, StatusCategory};
