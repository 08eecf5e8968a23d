//! # Router Module
//!
//! Path matching, route registration and request dispatch.
//!
//! ## Overview
//!
//! - [`PatternParser`] classifies each `/`-separated segment of a route as a
//!   literal, an unconstrained parameter (`{id}`) or a regex-constrained
//!   parameter (`{id:^[0-9]+$}`), caching compiled regexes by source
//! - [`RouteTree`] is a per-method compressed radix tree keyed on those
//!   segments
//! - [`Router`] is the root: it owns the trees, the root prefix and
//!   middleware, and the not-found handler, and serves requests
//! - [`Scope`], [`ScopeBuilder`] and [`RouteDeclaration`] layer prefixes and
//!   middleware over the root through the [`Routes`] trait
//!
//! ## Matching Precedence
//!
//! At every position a literal child beats a parameter child. Among
//! parameter children a constrained one is tried before an unconstrained
//! one, and the most recently registered wins inside each group. A
//! constrained parameter only matches a segment its regex accepts. Matching
//! commits to the first branch that consumes a segment: if that branch
//! dead-ends deeper down, the request is not found.
//!
//! ## Example
//!
//! ```rust
//! use radixmux::dispatcher::{Request, Response};
//! use radixmux::middleware::logger;
//! use radixmux::router::{Router, Routes};
//! use http::Method;
//!
//! # fn main() -> Result<(), radixmux::router::RouterError> {
//! let mut router = Router::new();
//! router.use_middleware(logger());
//!
//! let mut api = router.prefix("/api").sub_router();
//! api.get("/users/{id}", |req: &Request, res: &mut Response| {
//!     *res = Response::text(200, req.param("id").unwrap_or_default());
//! })?;
//!
//! let mut req = Request::new(Method::GET, "/api/users/7");
//! assert_eq!(router.handle(&mut req).body_str(), Some("7"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Performance
//!
//! Lookup walks one tree without retrying branches, so it costs O(path
//! length) plus one regex test per constrained parameter tried.
//! Parameter values are written into an inline [`SmallVec`](smallvec::SmallVec)
//! and never allocate a map.

mod core;
mod error;
mod pattern;
mod radix;
mod scope;

pub use self::core::{RouteMatch, Router};
pub use error::{PatternError, RouterError};
pub use pattern::{normalize, tokenize, ParamSpec, PatternParser, PatternSyntax, Segment};
pub use radix::RouteTree;
pub use scope::{RouteDeclaration, Routes, Scope, ScopeBuilder};
