use crate::dispatcher::HandlerResponse;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use lambda_http::{Body, Response};
use serde_json::Value;
use tracing::error;

/// Wrap a handler response into the hosting environment's envelope.
///
/// Status and body pass through untouched; a `content-type` header is
/// added only when the handler did not set one.
#[must_use]
pub fn into_envelope(response: HandlerResponse) -> Response<Body> {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_ref(), value.as_str());
    }
    if response.get_header("content-type").is_none() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }

    match builder.body(Body::Text(response.body.to_string())) {
        Ok(envelope) => envelope,
        Err(err) => {
            error!(
                error = %err,
                status = response.status,
                "Failed to build response envelope"
            );
            internal_error_envelope()
        }
    }
}

/// Build a JSON error envelope produced by the adapter itself
/// (no-route 404, missing-handler 500).
#[must_use]
pub fn json_error(status: u16, body: Value) -> Response<Body> {
    match Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(body.to_string()))
    {
        Ok(envelope) => envelope,
        Err(err) => {
            error!(error = %err, status = status, "Failed to build error envelope");
            internal_error_envelope()
        }
    }
}

/// Last-resort 500 envelope, constructed infallibly.
fn internal_error_envelope() -> Response<Body> {
    let mut envelope = Response::new(Body::Text(
        serde_json::json!({ "error": "Internal Server Error" }).to_string(),
    ));
    *envelope.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    envelope
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    envelope
}
