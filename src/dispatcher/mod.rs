//! # Dispatcher Module
//!
//! Request handler dispatch. The router resolves a request to a handler
//! *name*; the dispatcher owns the name → function table and invokes the
//! selected handler with the fully assembled [`HandlerRequest`].
//!
//! ## Handler Registration
//!
//! Handlers are registered with the dispatcher at startup:
//!
//! ```rust,ignore
//! use microroute::dispatcher::{Dispatcher, HandlerRequest, HandlerResponse};
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register_handler("get_item", |req: HandlerRequest| {
//!     HandlerResponse::json(200, serde_json::json!({
//!         "id": req.get_path_param("id")
//!     }))
//! });
//! ```
//!
//! ## Error Handling
//!
//! - A matched route whose handler name is missing from the registry
//!   yields `None`; the invocation adapter reports it as a 500.
//! - Handler panics are caught and become a generic 500 response. The
//!   panic text is logged, not returned to the caller.

mod core;

pub use core::{
    Dispatcher, Handler, HandlerRequest, HandlerResponse, HeaderVec, MAX_INLINE_HEADERS,
};
