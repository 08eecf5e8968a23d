use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::dispatcher::{Handler, Request, Response};

/// A transformation `Handler -> Handler`.
///
/// Given the rest of the chain, a middleware returns a new handler that may
/// run code before and after invoking it, or may not invoke it at all.
/// Middleware is applied once, at registration time.
pub type Middleware = Arc<dyn Fn(Handler) -> Handler + Send + Sync>;

/// Wrap a closure as a [`Middleware`]
pub fn middleware_fn<F>(f: F) -> Middleware
where
    F: Fn(Handler) -> Handler + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Before/after hooks, for middleware that doesn't need to hold the inner
/// handler itself.
///
/// Returning `Some` from [`before`](Hooks::before) short-circuits: the inner
/// handler is skipped and the returned response is used. [`after`](Hooks::after)
/// runs for every response, short-circuited or not.
pub trait Hooks: Send + Sync {
    /// Inspect the request before the inner handler; `Some` answers it directly
    fn before(&self, _req: &Request) -> Option<Response> {
        None
    }

    /// Observe the final response and the time spent producing it
    fn after(&self, _req: &Request, _res: &mut Response, _latency: Duration) {}
}

/// Turn a [`Hooks`] implementation into a chainable [`Middleware`]
pub fn from_hooks<H>(hooks: H) -> Middleware
where
    H: Hooks + 'static,
{
    let hooks = Arc::new(hooks);
    Arc::new(move |next: Handler| -> Handler {
        let hooks = Arc::clone(&hooks);
        Arc::new(move |req: &Request, res: &mut Response| {
            let start = Instant::now();
            match hooks.before(req) {
                Some(early) => *res = early,
                None => next(req, res),
            }
            hooks.after(req, res, start.elapsed());
        })
    })
}
