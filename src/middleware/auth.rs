use tracing::debug;

use super::core::{from_hooks, Hooks, Middleware};
use crate::dispatcher::{Request, Response};

/// Static bearer-token check
///
/// Rejects with 401 unless the `authorization` header equals the configured
/// token exactly.
pub struct AuthMiddleware {
    token: String,
}

impl AuthMiddleware {
    /// Accept requests whose `authorization` header equals `token` exactly
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

impl Hooks for AuthMiddleware {
    fn before(&self, req: &Request) -> Option<Response> {
        match req.get_header("authorization") {
            Some(h) if h == self.token => None,
            _ => {
                debug!(
                    request_id = %req.request_id,
                    path = %req.path,
                    "Rejected request without valid authorization"
                );
                Some(Response::error(401, "Unauthorized"))
            }
        }
    }
}

/// [`AuthMiddleware`] as a chainable middleware
pub fn bearer_auth(token: impl Into<String>) -> Middleware {
    from_hooks(AuthMiddleware::new(token.into()))
}
