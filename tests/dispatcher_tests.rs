//! Tests for the request dispatcher and handler registry.
//!
//! Covers handler registration and lookup, request assembly from a route
//! match, missing-handler behavior, and panic recovery.

use http::Method;
use microroute::dispatcher::{Dispatcher, HandlerResponse, HeaderVec};
use microroute::ids::RequestId;
use microroute::router::{RouteMatch, RouteMeta, Router};
use serde_json::json;
use std::sync::Arc;

fn match_for(router: &Router, method: Method, path: &str) -> RouteMatch {
    router.route(method, path).expect("route should match")
}

fn ping_router() -> Router {
    let mut router = Router::new();
    router
        .register(RouteMeta {
            method: Method::GET,
            path_pattern: "/ping/:word".to_string(),
            handler_name: "ping".to_string(),
        })
        .expect("register route");
    router
}

#[test]
fn test_dispatch_routes_to_handler() {
    let router = ping_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("ping", |_req| HandlerResponse::json(200, json!({"pong": true})));

    let response = dispatcher
        .dispatch(
            match_for(&router, Method::GET, "/ping/hello"),
            None,
            HeaderVec::new(),
            RequestId::new(),
        )
        .expect("handler should be registered");

    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"pong": true}));
    assert_eq!(response.get_header("content-type"), Some("application/json"));
}

#[test]
fn test_handler_receives_request_data() {
    let router = ping_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("ping", |req| {
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.get_path_param("word"), Some("hello"));
        assert_eq!(req.get_query_param("upper"), Some("true"));
        assert_eq!(req.get_header("X-Custom"), Some("1"));
        assert_eq!(req.body, Some(json!({"n": 1})));
        HandlerResponse::json(200, json!({"ok": true}))
    });

    let mut route_match = match_for(&router, Method::GET, "/ping/hello");
    route_match
        .query_params
        .push((Arc::from("upper"), "true".to_string()));

    let mut headers = HeaderVec::new();
    headers.push((Arc::from("x-custom"), "1".to_string()));

    let response = dispatcher
        .dispatch(route_match, Some(json!({"n": 1})), headers, RequestId::new())
        .expect("handler should be registered");
    assert_eq!(response.status, 200);
}

#[test]
fn test_dispatch_missing_handler_returns_none() {
    let router = ping_router();
    let dispatcher = Dispatcher::new();
    let response = dispatcher.dispatch(
        match_for(&router, Method::GET, "/ping/hello"),
        None,
        HeaderVec::new(),
        RequestId::new(),
    );
    assert!(response.is_none());
}

#[test]
fn test_panic_handler_returns_500() {
    let router = ping_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("ping", |_req| -> HandlerResponse {
        panic!("boom");
    });

    let response = dispatcher
        .dispatch(
            match_for(&router, Method::GET, "/ping/hello"),
            None,
            HeaderVec::new(),
            RequestId::new(),
        )
        .expect("panic should be converted, not propagated");

    assert_eq!(response.status, 500);
    // The panic text must not leak into the body.
    assert_eq!(response.body, json!({"error": "Internal Server Error"}));
}

#[test]
fn test_reregistering_handler_replaces_previous() {
    let router = ping_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("ping", |_req| HandlerResponse::json(200, json!({"v": 1})));
    dispatcher.register_handler("ping", |_req| HandlerResponse::json(200, json!({"v": 2})));

    let response = dispatcher
        .dispatch(
            match_for(&router, Method::GET, "/ping/hello"),
            None,
            HeaderVec::new(),
            RequestId::new(),
        )
        .expect("handler should be registered");
    assert_eq!(response.body, json!({"v": 2}));
}

#[test]
fn test_has_handler() {
    let mut dispatcher = Dispatcher::new();
    assert!(!dispatcher.has_handler("ping"));
    dispatcher.register_handler("ping", |_req| HandlerResponse::json(200, json!({})));
    assert!(dispatcher.has_handler("ping"));
}
