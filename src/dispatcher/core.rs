//! Dispatcher core - hot path for request dispatch.

use crate::ids::RequestId;
use crate::router::{ParamVec, RouteMatch};
use http::Method;
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Maximum inline headers before heap allocation.
/// Most requests have ≤16 headers.
pub const MAX_INLINE_HEADERS: usize = 16;

/// Stack-allocated header storage for the hot path.
///
/// Header names use `Arc<str>` because they repeat heavily
/// (`content-type`, `accept`, ...); values are per-request data.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// A registered handler function.
///
/// Handlers are pure: one request in, one response out, no retries and no
/// recovery beyond what the response itself expresses.
pub type Handler = Arc<dyn Fn(HandlerRequest) -> HandlerResponse + Send + Sync>;

/// Request data passed to a handler.
///
/// Contains the extracted HTTP request information: path/query parameters,
/// headers, and the JSON body when one was supplied. Read-only to handlers
/// and discarded once the response is produced.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// Unique request ID for tracing and correlation
    pub request_id: RequestId,
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Path pattern of the matched route
    pub path: String,
    /// Name of the handler that should process this request
    pub handler_name: String,
    /// Path parameters extracted from the URL
    pub path_params: ParamVec,
    /// Query string parameters
    pub query_params: ParamVec,
    /// HTTP headers (lowercase names)
    pub headers: HeaderVec,
    /// Request body parsed as JSON (if present and parseable)
    pub body: Option<Value>,
}

impl HandlerRequest {
    /// Get a path parameter by name (last write wins for duplicate names).
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter by name (last write wins for repeats).
    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a header by name (case-insensitive per RFC 7230).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response data produced by a handler.
///
/// Immutable once constructed and consumed exactly once by the invocation
/// adapter; the adapter passes status and body through untouched.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    /// HTTP status code (200, 201, 400, ...)
    pub status: u16,
    /// HTTP response headers
    #[serde(skip_serializing)]
    pub headers: HeaderVec,
    /// Response body as JSON
    pub body: Value,
}

impl HandlerResponse {
    /// Create a JSON response with a `content-type: application/json` header.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), "application/json".to_string()));
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create an error response with body `{"error": message}`.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({ "error": message }))
    }

    /// Get a header by name (case-insensitive).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or replace a header.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
    }
}

/// Dispatcher that routes matched requests to registered handler functions.
///
/// Maintains a registry of handler names to functions. The registry is
/// populated once at startup and never mutated during dispatch; the
/// hosting environment drives at most one invocation per instance, so no
/// synchronization is needed around the table.
#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: HashMap<String, Handler>,
}

impl Dispatcher {
    /// Create a new empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler function under the given name.
    ///
    /// Re-registering a name replaces the previous handler; the replacement
    /// is logged because it usually indicates a wiring mistake.
    pub fn register_handler<F>(&mut self, name: &str, handler_fn: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        if self.handlers.contains_key(name) {
            warn!(handler_name = %name, "Replaced existing handler");
        }

        info!(
            handler_name = %name,
            total_handlers = self.handlers.len() + 1,
            "Handler registered"
        );
        self.handlers.insert(name.to_string(), Arc::new(handler_fn));
    }

    /// True when a handler is registered under `name`.
    #[must_use]
    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Dispatch a matched request to its handler.
    ///
    /// Builds the [`HandlerRequest`] from the route match plus the
    /// adapter-supplied body and headers, then invokes the handler. A
    /// handler panic is caught and converted into a generic 500 response;
    /// the panic text goes to the log, never into the response body.
    ///
    /// Returns `None` when no handler is registered for the matched route,
    /// which the adapter reports as an internal error.
    #[must_use]
    pub fn dispatch(
        &self,
        route_match: RouteMatch,
        body: Option<Value>,
        headers: HeaderVec,
        request_id: RequestId,
    ) -> Option<HandlerResponse> {
        debug!(
            handler_name = %route_match.handler_name,
            available_handlers = self.handlers.len(),
            "Handler lookup"
        );

        let Some(handler) = self.handlers.get(&route_match.handler_name) else {
            let available: Vec<&String> = self.handlers.keys().collect();
            error!(
                handler_name = %route_match.handler_name,
                available_handlers = ?available,
                "Handler not found"
            );
            return None;
        };

        let request = HandlerRequest {
            request_id,
            method: route_match.route.method.clone(),
            path: route_match.route.path_pattern.clone(),
            handler_name: route_match.handler_name,
            path_params: route_match.path_params,
            query_params: route_match.query_params,
            headers,
            body,
        };

        let handler_name = request.handler_name.clone();
        info!(
            request_id = %request_id,
            handler_name = %handler_name,
            method = %request.method,
            path = %request.path,
            "Request dispatched to handler"
        );

        let start = Instant::now();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler(request)));

        let response = match result {
            Ok(response) => {
                info!(
                    request_id = %request_id,
                    handler_name = %handler_name,
                    latency_ms = start.elapsed().as_millis() as u64,
                    status = response.status,
                    "Handler response received"
                );
                response
            }
            Err(panic) => {
                error!(
                    request_id = %request_id,
                    handler_name = %handler_name,
                    panic_message = %format!("{panic:?}"),
                    "Handler panicked"
                );
                HandlerResponse::error(500, "Internal Server Error")
            }
        };

        Some(response)
    }
}
