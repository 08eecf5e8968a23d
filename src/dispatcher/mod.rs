//! # Dispatcher Module
//!
//! Request-side types shared by the router, the middleware chain and
//! application handlers.
//!
//! ## Overview
//!
//! - [`Request`] - immutable request view: method, path, headers, body and
//!   the path parameters bound by the router
//! - [`Response`] - mutable response sink: status, headers, body
//! - [`Handler`] - `Arc<dyn Fn(&Request, &mut Response) + Send + Sync>`
//! - [`RequestParams`] - per-request parameter store filled during resolution
//!
//! The transport that produces a `Request` and writes out a `Response` is
//! not part of this crate.
//!
//! ## Handler Example
//!
//! ```rust
//! use radixmux::dispatcher::{handler_fn, Request, Response};
//!
//! let get_user = handler_fn(|req: &Request, res: &mut Response| {
//!     let id = req.param("id").unwrap_or("unknown");
//!     *res = Response::json(200, serde_json::json!({ "id": id }));
//! });
//! # let _ = get_user;
//! ```

mod core;
mod params;

pub use self::core::{handler_fn, Handler, HeaderVec, Request, Response, MAX_INLINE_HEADERS};
pub use params::{ParamVec, RequestParams, MAX_INLINE_PARAMS};
