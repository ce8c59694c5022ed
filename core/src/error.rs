//! Error types for the lookup core.
//!
//! # Design
//! A non-200 status is not an error: it is the `RequestFailed` outcome.
//! The only failure the core can report is a 200 response whose body does
//! not have the `{"products": [{"title": ...}]}` shape.

use thiserror::Error;

/// Errors returned by `interpret`.
#[derive(Debug, Error)]
pub enum LookupError {
    /// A 200 response carried a body that is not a product listing.
    #[error("malformed product listing in 200 response: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
