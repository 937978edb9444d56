//! # Router Module
//!
//! Path matching and route resolution. Routes are registered explicitly at
//! startup as (method, path pattern, handler name) triples; the router
//! resolves each incoming request to exactly one of them or reports no
//! match.
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: at registration, path patterns (e.g. `/items/:id`)
//!    are converted into regex patterns that match and extract path
//!    parameters. Duplicate (method, pattern) registrations are rejected.
//!
//! 2. **Matching**: for each request, the router tests the path against
//!    the compiled patterns of the matching method until one hits,
//!    returning the route registration and extracted parameters.
//!
//! ## Example
//!
//! ```rust,ignore
//! use http::Method;
//! use microroute::router::{RouteMeta, Router};
//!
//! let mut router = Router::new();
//! router.register(RouteMeta {
//!     method: Method::GET,
//!     path_pattern: "/items/:id".to_string(),
//!     handler_name: "get_item".to_string(),
//! })?;
//!
//! if let Some(route_match) = router.route(Method::GET, "/items/42") {
//!     assert_eq!(route_match.get_path_param("id"), Some("42"));
//! }
//! ```

mod core;

pub use core::{ParamVec, RouteMatch, RouteMeta, Router, RouterError, MAX_INLINE_PARAMS};
