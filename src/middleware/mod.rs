//! # Middleware Module
//!
//! A [`Middleware`] is a `Handler -> Handler` transformation. Scopes collect
//! middleware in declaration order and [`chain::build`] folds them around a
//! route's handler once, at registration time.
//!
//! Two ways to write one:
//!
//! - [`middleware_fn`] for full control over when (and whether) the inner
//!   handler runs
//! - the [`Hooks`] trait plus [`from_hooks`] for the common before/after shape
//!
//! Stock middleware: [`logger`], [`request_span`], [`cors`], [`bearer_auth`].

mod auth;
pub mod chain;
mod core;
mod cors;
mod tracing;

pub use auth::{bearer_auth, AuthMiddleware};
pub use self::core::{from_hooks, middleware_fn, Hooks, Middleware};
pub use cors::{cors, CorsMiddleware};
pub use self::tracing::{logger, request_span};
