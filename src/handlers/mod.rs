//! # Handlers Module
//!
//! The three item endpoints, each a pure function from
//! [`HandlerRequest`](crate::dispatcher::HandlerRequest) to
//! [`HandlerResponse`](crate::dispatcher::HandlerResponse), plus the
//! registry that wires routes and handlers together at startup.

use crate::dispatcher::Dispatcher;
use crate::router::{RouteMeta, Router, RouterError};
use http::Method;

pub mod create_item;
pub mod get_item;
pub mod list_items;

/// Register every route and its handler.
///
/// Called once at startup, before the first invocation is accepted. The
/// route table and handler registry are never modified afterwards.
pub fn register_all(router: &mut Router, dispatcher: &mut Dispatcher) -> Result<(), RouterError> {
    let routes = [
        (Method::GET, "/items", "list_items"),
        (Method::GET, "/items/:id", "get_item"),
        (Method::POST, "/items", "create_item"),
    ];
    for (method, path_pattern, handler_name) in routes {
        router.register(RouteMeta {
            method,
            path_pattern: path_pattern.to_string(),
            handler_name: handler_name.to_string(),
        })?;
    }

    dispatcher.register_handler("list_items", list_items::handle);
    dispatcher.register_handler("get_item", get_item::handle);
    dispatcher.register_handler("create_item", create_item::handle);
    Ok(())
}
