//! # radixmux
//!
//! **radixmux** is an in-process HTTP request router built on a compressed
//! radix tree, with regex-constrained path parameters, nested route scopes
//! and composable middleware.
//!
//! ## Overview
//!
//! Routes are registered against a root [`Router`] or any scope derived from
//! it. Each route pattern is split on `/` and every segment is classified as
//! a literal (`users`), a parameter (`{id}`), or a parameter with a regex
//! constraint (`{id:^[0-9]+$}`). At request time the router walks one tree
//! per HTTP method, binds parameter values into the request, and invokes the
//! route's handler wrapped in the middleware chain that was in effect when
//! the route was registered.
//!
//! The crate does not listen on sockets or parse HTTP; a transport hands it
//! a [`Request`] and writes out the [`Response`] it returns.
//!
//! ## Architecture
//!
//! - **[`router`]** - pattern parsing, the radix tree, the root router and
//!   registration scopes
//! - **[`dispatcher`]** - request/response types, handlers and the
//!   per-request parameter store
//! - **[`middleware`]** - the `Handler -> Handler` middleware type, chain
//!   composition and stock middleware (logging, spans, CORS, bearer auth)
//! - **[`runtime_config`]** - router configuration from the environment or
//!   YAML
//! - **[`logging`]** - `tracing` subscriber setup for applications
//! - **[`cli`]** - the `radixmux` binary's commands and demo API
//!
//! ## Quick Start
//!
//! ```rust
//! use radixmux::{Request, Response, Router, Routes};
//! use radixmux::middleware::{bearer_auth, logger};
//! use http::Method;
//!
//! # fn main() -> Result<(), radixmux::RouterError> {
//! let mut router = Router::new();
//! router.use_middleware(logger());
//!
//! router.get("/users/{id:^[0-9]+$}", |req: &Request, res: &mut Response| {
//!     *res = Response::text(200, format!("user {}", req.param("id").unwrap_or_default()));
//! })?;
//! router.get("/users/me", |_req: &Request, res: &mut Response| {
//!     *res = Response::text(200, "me");
//! })?;
//!
//! {
//!     let mut admin = router.prefix("/admin").sub_router();
//!     admin.use_middleware(bearer_auth("Bearer s3cret"));
//!     admin.delete("/cache", |_req: &Request, res: &mut Response| {
//!         *res = Response::text(202, "cleared");
//!     })?;
//! }
//!
//! let mut req = Request::new(Method::GET, "/users/me");
//! assert_eq!(router.handle(&mut req).body_str(), Some("me"));
//!
//! let mut req = Request::new(Method::GET, "/users/42");
//! assert_eq!(router.handle(&mut req).body_str(), Some("user 42"));
//!
//! let mut req = Request::new(Method::DELETE, "/admin/cache");
//! assert_eq!(router.handle(&mut req).status, 401);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`RouterConfig`] controls the parameter syntax (brackets and regex
//! separator), the default not-found body and route-registration logging.
//! See [`runtime_config`] for the `RADIXMUX_*` environment variables.

pub mod cli;
pub mod dispatcher;
pub mod ids;
pub mod logging;
pub mod middleware;
pub mod router;
pub mod runtime_config;

pub use dispatcher::{handler_fn, Handler, Request, RequestParams, Response};
pub use ids::RequestId;
pub use middleware::{middleware_fn, Middleware};
pub use router::{
    PatternError, RouteMatch, Router, RouterError, Routes, Scope, ScopeBuilder,
};
pub use runtime_config::{ConfigError, RouterConfig};
