//! Router core - hot path for request routing.

use http::Method;
use regex::Regex;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of path/query parameters before heap allocation.
/// The registered routes carry at most one parameter (`/items/:id`);
/// eight covers any realistic extension without touching the heap.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the hot path.
///
/// Param names use `Arc<str>` because they come from the static route
/// table (known at startup); values are per-request data from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// A single route registration: method, path pattern, handler name.
///
/// Created once at startup and immutable thereafter. The pattern may
/// contain named parameter segments written `:id` or `{id}`; either form
/// binds exactly one path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    pub method: Method,
    pub path_pattern: String,
    pub handler_name: String,
}

/// Result of successfully matching a request path to a route.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route registration (Arc to avoid expensive clones)
    pub route: Arc<RouteMeta>,
    /// Path parameters extracted from the URL (e.g., `:id` → `{"id": "42"}`)
    pub path_params: ParamVec,
    /// Name of the handler that should process this request
    pub handler_name: String,
    /// Query string parameters (populated by the invocation adapter)
    pub query_params: ParamVec,
}

impl RouteMatch {
    /// Get a path parameter by name.
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// at different path depths, returns the last occurrence.
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
}

/// Registration-time error. Dispatch itself never fails with this type;
/// a request that matches nothing is reported as `None` from [`Router::route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A route with the same method and an equivalent path pattern is
    /// already registered. Equivalence is judged on the compiled pattern,
    /// so `/items/:id` and `/items/{id}` collide.
    DuplicateRoute {
        method: Method,
        path_pattern: String,
    },
    /// The path pattern could not be compiled into a matcher.
    InvalidPattern { path_pattern: String },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::DuplicateRoute {
                method,
                path_pattern,
            } => {
                write!(
                    f,
                    "route registration error: {method} {path_pattern} is already registered"
                )
            }
            RouterError::InvalidPattern { path_pattern } => {
                write!(
                    f,
                    "route registration error: cannot compile path pattern '{path_pattern}'"
                )
            }
        }
    }
}

impl std::error::Error for RouterError {}

struct CompiledRoute {
    method: Method,
    regex: Regex,
    param_names: Vec<Arc<str>>,
    meta: Arc<RouteMeta>,
}

/// Router that matches HTTP requests against registered routes.
///
/// Patterns are compiled to regexes at registration time; matching is a
/// linear scan over the table. With a handful of routes the scan is
/// cheaper than any index, and the table never changes after startup.
#[derive(Default)]
pub struct Router {
    routes: Vec<CompiledRoute>,
}

impl Router {
    /// Create an empty router. Routes are added with [`Router::register`].
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route, compiling its path pattern.
    ///
    /// Fails with [`RouterError::DuplicateRoute`] when a route with the
    /// same method and an equivalent pattern already exists. Uniqueness is
    /// enforced here so a collision surfaces at startup, not as a
    /// first-route-wins surprise during dispatch.
    pub fn register(&mut self, route: RouteMeta) -> Result<(), RouterError> {
        let (regex, param_names) = Self::path_to_regex(&route.path_pattern)?;

        if self
            .routes
            .iter()
            .any(|r| r.method == route.method && r.regex.as_str() == regex.as_str())
        {
            return Err(RouterError::DuplicateRoute {
                method: route.method,
                path_pattern: route.path_pattern,
            });
        }

        info!(
            method = %route.method,
            path_pattern = %route.path_pattern,
            handler_name = %route.handler_name,
            routes_count = self.routes.len() + 1,
            "Route registered"
        );

        self.routes.push(CompiledRoute {
            method: route.method.clone(),
            regex,
            param_names,
            meta: Arc::new(route),
        });
        Ok(())
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Match an HTTP request to a route.
    ///
    /// Returns `None` when no registered route matches; the caller turns
    /// that into a 404-equivalent envelope.
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "Route match attempt");

        for candidate in &self.routes {
            if candidate.method != method {
                continue;
            }
            let Some(captures) = candidate.regex.captures(path) else {
                continue;
            };

            let path_params: ParamVec = candidate
                .param_names
                .iter()
                .zip(captures.iter().skip(1))
                .filter_map(|(name, cap)| cap.map(|c| (name.clone(), c.as_str().to_string())))
                .collect();

            info!(
                method = %method,
                path = %path,
                handler_name = %candidate.meta.handler_name,
                route_pattern = %candidate.meta.path_pattern,
                path_params = ?path_params,
                "Route matched"
            );

            return Some(RouteMatch {
                route: candidate.meta.clone(),
                path_params,
                handler_name: candidate.meta.handler_name.clone(),
                query_params: ParamVec::new(),
            });
        }

        warn!(method = %method, path = %path, "No route matched");
        None
    }

    /// Convert a path pattern into a regex plus ordered parameter names.
    ///
    /// `/items/:id` and `/items/{id}` both become `^/items/([^/]+)$` with
    /// parameter names `["id"]`. Literal segments are regex-escaped.
    pub(crate) fn path_to_regex(path: &str) -> Result<(Regex, Vec<Arc<str>>), RouterError> {
        let invalid = |_| RouterError::InvalidPattern {
            path_pattern: path.to_string(),
        };

        if path == "/" {
            return Ok((Regex::new(r"^/$").map_err(invalid)?, Vec::new()));
        }

        let mut pattern = String::with_capacity(path.len() + 8);
        pattern.push('^');
        let mut param_names: Vec<Arc<str>> = Vec::new();

        for segment in path.split('/') {
            if segment.is_empty() {
                continue;
            }
            let param = if let Some(name) = segment.strip_prefix(':') {
                Some(name)
            } else if segment.starts_with('{') && segment.ends_with('}') {
                Some(segment.trim_start_matches('{').trim_end_matches('}'))
            } else {
                None
            };

            match param {
                Some(name) if !name.is_empty() => {
                    pattern.push_str("/([^/]+)");
                    param_names.push(Arc::from(name));
                }
                _ => {
                    pattern.push('/');
                    pattern.push_str(&regex::escape(segment));
                }
            }
        }

        pattern.push('$');
        let regex = Regex::new(&pattern).map_err(invalid)?;
        Ok((regex, param_names))
    }
}
