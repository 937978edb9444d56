use crate::dispatcher::HeaderVec;
use crate::router::ParamVec;
use http::Method;
use lambda_http::{Body, Request};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Parsed invocation envelope data used by `AppService`.
///
/// Everything the router and dispatcher need, extracted from the hosting
/// environment's request envelope: method, path, lowercase headers, query
/// parameters, and the JSON body when one was supplied.
#[derive(Debug)]
pub struct ParsedEvent {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path without the query string
    pub path: String,
    /// HTTP headers (lowercase names)
    pub headers: HeaderVec,
    /// Parsed query string parameters
    pub query_params: ParamVec,
    /// Parsed JSON body (`None` when absent or unparseable)
    pub body: Option<Value>,
}

/// Parse query string parameters from a raw query string.
///
/// URL-decodes names and values; repeated names are all kept, and the
/// last-write-wins accessors resolve repeats downstream.
#[must_use]
pub fn parse_query_params(query: Option<&str>) -> ParamVec {
    query
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (Arc::from(k.as_ref()), v.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Extract the raw body text from the envelope, if any.
fn body_text(body: &Body) -> Option<&[u8]> {
    match body {
        Body::Empty => None,
        Body::Text(s) => (!s.is_empty()).then(|| s.as_bytes()),
        Body::Binary(b) => (!b.is_empty()).then(|| b.as_slice()),
    }
}

/// Parse an incoming invocation envelope into a [`ParsedEvent`].
///
/// A body that is not valid JSON parses to `None`; the create handler is
/// the one that decides what an absent or malformed body means.
#[must_use]
pub fn parse_event(event: &Request) -> ParsedEvent {
    let method = event.method().clone();
    let path = event.uri().path().to_string();

    let headers: HeaderVec = event
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                Arc::from(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            )
        })
        .collect();

    let query_params = parse_query_params(event.uri().query());
    debug!(
        header_count = headers.len(),
        param_count = query_params.len(),
        query_params = ?query_params,
        "Envelope headers and query params extracted"
    );

    let body = body_text(event.body()).and_then(|bytes| {
        let parsed: Option<Value> = serde_json::from_slice(bytes).ok();
        debug!(
            body_size_bytes = bytes.len(),
            parsed = parsed.is_some(),
            "Request body read"
        );
        parsed
    });

    ParsedEvent {
        method,
        path,
        headers,
        query_params,
        body,
    }
}
