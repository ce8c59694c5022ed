//! Stateless request builder and response interpreter for the lookup API.
//!
//! # Design
//! `build_lookup` produces an `HttpRequest` from a `LookupRequest`;
//! `interpret` consumes the `HttpResponse` the caller got back. Nothing here
//! performs I/O or keeps state between calls.

use log::debug;

use crate::error::LookupError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::outcome::LookupOutcome;
use crate::types::{LookupRequest, Product, ProductsPage};

/// Build `GET {endpoint}?barcode={barcode}&formatted=y&key={api_key}`.
///
/// Query values are percent-encoded; the barcode is otherwise passed
/// through unvalidated.
pub fn build_lookup(request: &LookupRequest) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url: format!(
            "{}?barcode={}&formatted=y&key={}",
            request.endpoint(),
            urlencoding::encode(request.barcode()),
            urlencoding::encode(request.api_key()),
        ),
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

/// Classify a lookup response.
///
/// Any status other than 200 is `RequestFailed` and the body is not looked
/// at. On 200 the first product's title wins; an empty list is `NotFound`.
///
/// # Errors
/// `LookupError::MalformedBody` when a 200 body is not JSON, has no
/// `products` key, or its first product has no scalar `title`.
pub fn interpret(response: &HttpResponse) -> Result<LookupOutcome, LookupError> {
    if response.status != 200 {
        debug!("lookup answered {}, skipping body", response.status);
        return Ok(LookupOutcome::RequestFailed {
            status: response.status,
        });
    }

    let page: ProductsPage = serde_json::from_str(&response.body)?;
    debug!("lookup returned {} product(s)", page.products.len());

    let Some(first) = page.products.into_iter().next() else {
        return Ok(LookupOutcome::NotFound);
    };
    let product: Product = serde_json::from_value(first)?;
    Ok(LookupOutcome::Found {
        title: product.title,
    })
}
