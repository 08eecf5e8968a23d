//! Router core module - registration and the per-request hot path.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use http::Method;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::error::RouterError;
use super::pattern::{normalize, PatternParser};
use super::radix::RouteTree;
use super::scope::{join_path, Routes, Scope, ScopeBuilder};
use crate::dispatcher::{Handler, Request, RequestParams, Response};
use crate::middleware::{chain, Middleware};
use crate::runtime_config::RouterConfig;

/// Result of successfully matching a request path to a route
pub struct RouteMatch {
    /// The composed handler (route handler wrapped in its middleware chain)
    pub handler: Handler,
    /// Path parameters extracted from the URL (e.g., `{id}` → `id = "123"`)
    pub params: RequestParams,
}

impl fmt::Debug for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// The root router
///
/// Owns one radix tree per HTTP method, the pattern parser (and its regex
/// cache), the root prefix and middleware, and the not-found handler.
///
/// # Phases
///
/// Registration happens on one thread before serving starts. Once serving
/// begins the router is only read: [`handle`](Router::handle) and
/// [`resolve`](Router::resolve) take `&self` and may run concurrently from
/// any number of threads. Adding routes or middleware after serving has
/// started is a precondition violation; wrap the router in your own lock if
/// you need live re-registration.
///
/// # Example
///
/// ```rust
/// use radixmux::router::{Router, Routes};
/// use radixmux::dispatcher::{Request, Response};
/// use http::Method;
///
/// # fn main() -> Result<(), radixmux::router::RouterError> {
/// let mut router = Router::new();
/// router.get("/users/{id:^[0-9]+$}", |req: &Request, res: &mut Response| {
///     *res = Response::text(200, format!("user {}", req.param("id").unwrap_or("?")));
/// })?;
///
/// let mut req = Request::new(Method::GET, "/users/42");
/// let res = router.handle(&mut req);
/// assert_eq!(res.body_str(), Some("user 42"));
/// # Ok(())
/// # }
/// ```
pub struct Router {
    tree: RouteTree<Handler>,
    parser: PatternParser,
    prefix: String,
    middleware: Vec<Middleware>,
    not_found: Handler,
    log_routes: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::build(&RouterConfig::default(), String::new())
    }

    /// Create a router whose prefix is applied to every route it registers
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::build(&RouterConfig::default(), prefix.into())
    }

    /// Create a router from a configuration
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Config`] when the parameter syntax is ambiguous.
    pub fn from_config(config: &RouterConfig) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self::build(config, String::new()))
    }

    fn build(config: &RouterConfig, prefix: String) -> Self {
        let body = config.not_found_body.clone();
        Self {
            tree: RouteTree::new(),
            parser: PatternParser::new(config.syntax()),
            prefix,
            middleware: Vec::new(),
            not_found: Arc::new(move |_req: &Request, res: &mut Response| {
                *res = Response::text(404, body.as_str());
            }),
            log_routes: config.log_routes,
        }
    }

    /// Replace the handler invoked when no route matches
    pub fn not_found<F>(&mut self, handler: F)
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.not_found = Arc::new(handler);
    }

    /// Every registered route as `"{METHOD} {path}"`, in tree order
    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        self.tree.routes()
    }

    /// Number of registered routes across all methods
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.tree.len()
    }

    /// Print all registered routes to stdout
    pub fn dump_routes(&self) {
        println!("[routes] prefix={} count={}", self.prefix, self.route_count());
        for route in self.routes() {
            println!("[route] {route}");
        }
    }

    /// Match a method and path without invoking anything
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the composed handler and extracted parameters
    /// * `None` - no route matches (the not-found case)
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        let (handler, params) = self.tree.resolve(method, &normalize(path))?;
        Some(RouteMatch {
            handler: Arc::clone(handler),
            params,
        })
    }

    /// Serve one request
    ///
    /// A fresh parameter store is attached to `req`, the path is resolved,
    /// and either the matched handler or the not-found handler is invoked
    /// exactly once. Never panics on a miss.
    pub fn handle(&self, req: &mut Request) -> Response {
        let match_start = Instant::now();
        let mut params = RequestParams::new();
        let found = {
            let path = normalize(&req.path);
            self.tree.resolve_into(&req.method, &path, &mut params)
        };
        let match_duration = match_start.elapsed();
        *req.params_mut() = params;

        let mut res = Response::default();
        match found {
            Some(handler) => {
                if match_duration > Duration::from_millis(1) {
                    warn!(
                        request_id = %req.request_id,
                        method = %req.method,
                        path = %req.path,
                        duration_us = match_duration.as_micros() as u64,
                        "Slow route matching detected"
                    );
                } else {
                    debug!(
                        request_id = %req.request_id,
                        method = %req.method,
                        path = %req.path,
                        path_params = ?req.params(),
                        duration_us = match_duration.as_micros() as u64,
                        "Route matched"
                    );
                }
                handler(req, &mut res);
            }
            None => {
                debug!(
                    request_id = %req.request_id,
                    method = %req.method,
                    path = %req.path,
                    "No route matched"
                );
                (self.not_found)(req, &mut res);
            }
        }
        res
    }
}

impl Routes for Router {
    fn register(
        &mut self,
        method: Method,
        path: &str,
        handler: Handler,
        route_middleware: &[Middleware],
    ) -> Result<(), RouterError> {
        let full_path = join_path(&self.prefix, path);
        let segments = self.parser.parse_path(&full_path)?;

        let middleware: Vec<Middleware> = self
            .middleware
            .iter()
            .chain(route_middleware)
            .map(Arc::clone)
            .collect();
        let handler = chain::build(handler, &middleware);

        let replaced = self.tree.insert(method.clone(), segments, handler);
        if replaced.is_some() {
            warn!(
                method = %method,
                path = %normalize(&full_path),
                "Replaced existing route handler"
            );
        } else if self.log_routes {
            info!(
                method = %method,
                path = %normalize(&full_path),
                middleware_count = middleware.len(),
                total_routes = self.tree.len(),
                "Route registered"
            );
        }
        Ok(())
    }

    fn use_middleware(&mut self, middleware: Middleware) {
        self.middleware.push(middleware);
    }

    fn sub_router(&mut self) -> Scope<'_> {
        Scope::new(self, String::new(), Vec::new())
    }

    fn prefix(&mut self, prefix: &str) -> ScopeBuilder<'_> {
        ScopeBuilder::new(self, prefix.to_string(), Vec::new())
    }
}
