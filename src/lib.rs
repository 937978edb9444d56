//! # microroute
//!
//! **microroute** is a minimal, registration-driven HTTP request router
//! exposed through an AWS Lambda function entry point. It serves three
//! item endpoints; each handler formats a string and returns it, with no
//! persistence and no business logic beyond type-checking two JSON fields.
//!
//! ## Architecture
//!
//! The library is organized into four modules:
//!
//! - **[`router`]** - path matching and route resolution using compiled
//!   regex matchers; routes are registered once at startup
//! - **[`dispatcher`]** - handler registry and request dispatch with panic
//!   recovery
//! - **[`handlers`]** - the item endpoints and the startup registry that
//!   wires routes to handlers
//! - **[`server`]** - the invocation adapter translating between the
//!   Lambda proxy envelope and the router's request/response types
//!
//! ## Request Handling Flow
//!
//! 1. The hosting environment delivers an invocation envelope
//! 2. The adapter unwraps it: method, path, headers, query params, body
//! 3. The router matches method + path and extracts path parameters
//! 4. The dispatcher invokes the matched handler
//! 5. The handler builds a JSON response
//! 6. The adapter wraps status, headers, and body back into the envelope
//!
//! No match is a 404 envelope; any internal fault is caught at the adapter
//! boundary and becomes a generic 500 envelope. The router and dispatcher
//! tables are immutable after startup, so dispatch needs no locking.
//!
//! ## Quick Start
//!
//! ```no_run
//! use microroute::dispatcher::Dispatcher;
//! use microroute::router::Router;
//! use microroute::server::AppService;
//!
//! # fn main() -> Result<(), microroute::router::RouterError> {
//! let mut router = Router::new();
//! let mut dispatcher = Dispatcher::new();
//! microroute::handlers::register_all(&mut router, &mut dispatcher)?;
//!
//! let service = AppService::new(router, dispatcher);
//! // hand `service` to the Lambda runtime via `lambda_http::run`
//! # Ok(())
//! # }
//! ```

pub mod dispatcher;
pub mod handlers;
pub mod ids;
pub mod router;
pub mod server;

pub use dispatcher::{Dispatcher, HandlerRequest, HandlerResponse};
pub use ids::RequestId;
pub use router::{RouteMatch, RouteMeta, Router, RouterError};
pub use server::AppService;
