//! Executes core `HttpRequest`s over the network with ureq.

use std::time::Duration;

use eyre::{Result, WrapErr};
use log::trace;
use lookup_core::{HttpMethod, HttpRequest, HttpResponse};
use ureq::Agent;

/// Perform one blocking round-trip.
///
/// 4xx/5xx responses come back as data so the interpreter can classify
/// them; only transport failures are errors. The request URL carries the
/// API key, so it is never put into error messages.
pub fn execute(request: &HttpRequest, timeout: Duration) -> Result<HttpResponse> {
    let agent = Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent();

    let mut call = match request.method {
        HttpMethod::Get => agent.get(&request.url),
    };
    for (name, value) in &request.headers {
        call = call.header(name.as_str(), value.as_str());
    }

    let mut response = call
        .call()
        .wrap_err_with(|| format!("{} request to lookup service failed", request.method.as_str()))?;

    let status = response.status().as_u16();
    if let Some(content_type) = response.headers().get("content-type") {
        trace!("response content type: {content_type:?}");
    }
    // Only a 200 body is ever interpreted; an unreadable error page must
    // not turn a `RequestFailed` outcome into a fatal error.
    let body = match response.body_mut().read_to_string() {
        Ok(body) => body,
        Err(err) if status != 200 => {
            trace!("discarding unreadable {status} body: {err}");
            String::new()
        }
        Err(err) => return Err(err).wrap_err("failed to read lookup response body"),
    };
    trace!("received {status} with {} byte body", body.len());

    Ok(HttpResponse::new(status, body))
}
