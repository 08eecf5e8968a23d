use std::time::Duration;

use http::Method;

use super::core::{from_hooks, Hooks, Middleware};
use crate::dispatcher::{HeaderVec, Request, Response};

/// CORS (Cross-Origin Resource Sharing) middleware
///
/// Handles preflight OPTIONS requests and adds CORS headers to responses.
/// Configurable with allowed origins, headers, and methods.
pub struct CorsMiddleware {
    allowed_origins: Vec<String>,
    allowed_headers: Vec<String>,
    allowed_methods: Vec<Method>,
}

impl CorsMiddleware {
    /// Create a new CORS middleware with specific configuration
    ///
    /// # Example
    ///
    /// ```rust
    /// use radixmux::middleware::CorsMiddleware;
    /// use http::Method;
    ///
    /// let cors = CorsMiddleware::new(
    ///     vec!["https://example.com".to_string()],
    ///     vec!["Content-Type".to_string()],
    ///     vec![Method::GET, Method::POST],
    /// );
    /// # let _ = cors;
    /// ```
    pub fn new(
        allowed_origins: Vec<String>,
        allowed_headers: Vec<String>,
        allowed_methods: Vec<Method>,
    ) -> Self {
        Self {
            allowed_origins,
            allowed_headers,
            allowed_methods,
        }
    }

    fn allowed_methods(&self) -> String {
        self.allowed_methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Permissive policy: any origin, the common methods, Content-Type and
/// Authorization headers.
impl Default for CorsMiddleware {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            allowed_headers: vec!["Content-Type".into(), "Authorization".into()],
            allowed_methods: vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ],
        }
    }
}

impl Hooks for CorsMiddleware {
    /// Answer preflight (OPTIONS) requests with 204 and the allowed methods
    /// and headers; the route handler is not invoked.
    fn before(&self, req: &Request) -> Option<Response> {
        if req.method != Method::OPTIONS {
            return None;
        }
        let mut res = Response::new(204, HeaderVec::new(), Vec::new());
        res.set_header("Access-Control-Allow-Methods", self.allowed_methods());
        res.set_header("Access-Control-Allow-Headers", self.allowed_headers.join(", "));
        Some(res)
    }

    fn after(&self, _req: &Request, res: &mut Response, _latency: Duration) {
        res.set_header("Access-Control-Allow-Origin", self.allowed_origins.join(", "));
    }
}

/// Default [`CorsMiddleware`] as a chainable middleware
pub fn cors() -> Middleware {
    from_hooks(CorsMiddleware::default())
}
