use super::request::{parse_event, ParsedEvent};
use super::response::{into_envelope, json_error};
use crate::dispatcher::Dispatcher;
use crate::ids::RequestId;
use crate::router::Router;
use lambda_http::{Body, Request, Response};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info};

/// The invocation adapter: bridges the hosting environment's envelope and
/// the router/dispatcher pair.
///
/// Constructed explicitly at startup with a fully registered router and
/// dispatcher; both are immutable from then on, so the service is a pair
/// of plain `Arc`s with no interior locking.
#[derive(Clone)]
pub struct AppService {
    router: Arc<Router>,
    dispatcher: Arc<Dispatcher>,
}

impl AppService {
    #[must_use]
    pub fn new(router: Router, dispatcher: Dispatcher) -> Self {
        Self {
            router: Arc::new(router),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Handle one invocation envelope and produce the response envelope.
    ///
    /// Never returns an error to the hosting environment: no route match
    /// becomes a 404 envelope, and every internal fault (missing handler,
    /// handler panic, envelope construction failure) becomes a generic
    /// 500 envelope. Handler-provided status codes and bodies are passed
    /// through unaltered.
    #[must_use]
    pub fn handle(&self, event: Request) -> Response<Body> {
        let request_id = RequestId::new();
        let ParsedEvent {
            method,
            path,
            headers,
            query_params,
            body,
        } = parse_event(&event);

        if let Some(upstream_id) = headers
            .iter()
            .find(|(k, _)| k.as_ref() == "x-amzn-requestid")
            .map(|(_, v)| v.as_str())
        {
            debug!(
                request_id = %request_id,
                upstream_request_id = %upstream_id,
                "Upstream request id attached"
            );
        }

        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Invocation received"
        );

        let Some(mut route_match) = self.router.route(method.clone(), &path) else {
            return json_error(
                404,
                json!({ "error": "Not Found", "method": method.as_str(), "path": path }),
            );
        };
        route_match.query_params = query_params;

        match self
            .dispatcher
            .dispatch(route_match, body, headers, request_id)
        {
            Some(response) => {
                info!(
                    request_id = %request_id,
                    status = response.status,
                    "Invocation complete"
                );
                into_envelope(response)
            }
            None => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    "No handler registered for matched route"
                );
                json_error(500, json!({ "error": "Internal Server Error" }))
            }
        }
    }
}
