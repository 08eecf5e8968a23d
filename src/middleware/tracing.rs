use std::sync::Arc;
use std::time::Instant;

use tracing::{info, info_span};

use super::core::{middleware_fn, Middleware};
use crate::dispatcher::{Handler, Request, Response};

/// Log method, path and header count of every request, then continue
pub fn logger() -> Middleware {
    middleware_fn(|next: Handler| -> Handler {
        Arc::new(move |req: &Request, res: &mut Response| {
            info!(
                request_id = %req.request_id,
                method = %req.method,
                path = %req.path,
                header_count = req.headers.len(),
                "Incoming request"
            );
            next(req, res);
        })
    })
}

/// Run the rest of the chain inside a `request` span and record status and
/// latency when it returns
pub fn request_span() -> Middleware {
    middleware_fn(|next: Handler| -> Handler {
        Arc::new(move |req: &Request, res: &mut Response| {
            let span = info_span!(
                "request",
                request_id = %req.request_id,
                method = %req.method,
                path = %req.path
            );
            let _guard = span.enter();
            let start = Instant::now();
            next(req, res);
            info!(
                status = res.status,
                latency_us = start.elapsed().as_micros() as u64,
                "Request completed"
            );
        })
    })
}
