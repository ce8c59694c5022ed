//! Barcode product lookup core.
//!
//! # Overview
//! Builds the lookup `HttpRequest` and interprets the `HttpResponse`
//! without touching the network (host-does-IO pattern). The caller executes
//! the actual HTTP round-trip, so the core is deterministic and testable.
//!
//! # Design
//! - `build_lookup` turns a `LookupRequest` into a GET request.
//! - `interpret` classifies a response into a `LookupOutcome`. A non-200
//!   status always wins over the body; only a malformed 200 body is an error.
//! - `LookupOutcome` renders the single line the CLI prints.

pub mod client;
pub mod error;
pub mod http;
pub mod outcome;
pub mod types;

pub use client::{build_lookup, interpret};
pub use error::LookupError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::LookupOutcome;
pub use types::{LookupRequest, Product, ProductsPage, DEFAULT_ENDPOINT};
