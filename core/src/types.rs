//! Lookup request and response DTOs.
//!
//! # Design
//! These mirror the subset of the lookup service's schema the client reads.
//! They are defined independently from the mock-server crate; integration
//! tests catch schema drift between the two.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Default endpoint of the third-party barcode lookup service.
pub const DEFAULT_ENDPOINT: &str = "https://api.barcodelookup.com/v3/products";

/// A single product lookup: which barcode, with which key, against which
/// endpoint. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    barcode: String,
    api_key: String,
    endpoint: String,
}

impl LookupRequest {
    /// A request against `DEFAULT_ENDPOINT`.
    pub fn new(barcode: &str, api_key: &str) -> Self {
        Self::with_endpoint(barcode, api_key, DEFAULT_ENDPOINT)
    }

    /// A request against a custom endpoint. A trailing `/` is dropped.
    pub fn with_endpoint(barcode: &str, api_key: &str, endpoint: &str) -> Self {
        Self {
            barcode: barcode.to_string(),
            api_key: api_key.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Envelope of a successful lookup.
///
/// Elements are kept as raw JSON: only the first one is ever decoded, so a
/// malformed second product does not fail the lookup. `"products": null`
/// reads as an empty listing; a missing `products` key is still an error.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    #[serde(deserialize_with = "null_as_empty")]
    pub products: Vec<Value>,
}

/// The fields of a product record the client uses. Everything else the
/// service sends is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Numbers and booleans are accepted and kept in their JSON spelling.
    #[serde(deserialize_with = "scalar_title")]
    pub title: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(title) => Ok(title),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "product title must be a string, number or boolean, got {other}"
        ))),
    }
}
