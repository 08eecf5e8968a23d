use super::core::Middleware;
use crate::dispatcher::Handler;

/// Wrap `terminal` in `middleware`.
///
/// Composition runs right to left: the last middleware wraps the terminal
/// handler first, so at call time the first middleware in the list is the
/// outermost one. Its pre-logic runs first and its post-logic last. A
/// middleware that does not call its inner handler stops everything listed
/// after it.
///
/// The result is built once and reused for every matching request.
#[must_use]
pub fn build(terminal: Handler, middleware: &[Middleware]) -> Handler {
    middleware
        .iter()
        .rev()
        .fold(terminal, |next, wrap| wrap(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::{handler_fn, Request, Response};
    use crate::middleware::middleware_fn;
    use http::Method;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<String>>>;

    fn recording(name: &'static str, log: &Log) -> Middleware {
        let log = Arc::clone(log);
        middleware_fn(move |next: Handler| -> Handler {
            let log = Arc::clone(&log);
            Arc::new(move |req: &Request, res: &mut Response| {
                log.lock().unwrap().push(format!("{name}-pre"));
                next(req, res);
                log.lock().unwrap().push(format!("{name}-post"));
            })
        })
    }

    fn terminal(log: &Log) -> Handler {
        let log = Arc::clone(log);
        handler_fn(move |_req, res| {
            log.lock().unwrap().push("handler".to_string());
            res.status = 204;
        })
    }

    fn call(handler: &Handler) -> Response {
        let req = Request::new(Method::GET, "/");
        let mut res = Response::default();
        handler(&req, &mut res);
        res
    }

    #[test]
    fn test_empty_chain_is_terminal() {
        let log = Log::default();
        let handler = build(terminal(&log), &[]);
        assert_eq!(call(&handler).status, 204);
        assert_eq!(*log.lock().unwrap(), vec!["handler"]);
    }

    #[test]
    fn test_first_middleware_is_outermost() {
        let log = Log::default();
        let chain = [recording("A", &log), recording("B", &log), recording("C", &log)];
        let handler = build(terminal(&log), &chain);
        call(&handler);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["A-pre", "B-pre", "C-pre", "handler", "C-post", "B-post", "A-post"]
        );
    }

    #[test]
    fn test_short_circuit_skips_the_rest() {
        let log = Log::default();
        let deny = middleware_fn(|_next: Handler| -> Handler {
            Arc::new(|_req: &Request, res: &mut Response| {
                *res = Response::error(403, "Forbidden");
            })
        });
        let chain = [recording("A", &log), deny, recording("C", &log)];
        let handler = build(terminal(&log), &chain);
        assert_eq!(call(&handler).status, 403);
        assert_eq!(*log.lock().unwrap(), vec!["A-pre", "A-post"]);
    }

    #[test]
    fn test_chain_is_reusable() {
        let log = Log::default();
        let handler = build(terminal(&log), &[recording("A", &log)]);
        call(&handler);
        call(&handler);
        assert_eq!(log.lock().unwrap().len(), 6);
    }
}
