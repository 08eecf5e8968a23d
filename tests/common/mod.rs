#![allow(dead_code)]

use http::Method;
use radixmux::dispatcher::{Request, Response};
use radixmux::middleware::{middleware_fn, Middleware};
use radixmux::{Handler, Router};
use std::sync::{Arc, Mutex};

/// Shared, ordered record of side effects
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Middleware that records `{label}-pre` and `{label}-post` around the inner handler
pub fn recording(log: &EventLog, label: &str) -> Middleware {
    let log = Arc::clone(log);
    let label = label.to_string();
    middleware_fn(move |next: Handler| -> Handler {
        let log = Arc::clone(&log);
        let label = label.clone();
        Arc::new(move |req: &Request, res: &mut Response| {
            log.lock().unwrap().push(format!("{label}-pre"));
            next(req, res);
            log.lock().unwrap().push(format!("{label}-post"));
        })
    })
}

/// Handler that records `event` and answers 200 with `event` as the body
pub fn recording_handler(
    log: &EventLog,
    event: &str,
) -> impl Fn(&Request, &mut Response) + Send + Sync + 'static {
    let log = Arc::clone(log);
    let event = event.to_string();
    move |_req: &Request, res: &mut Response| {
        log.lock().unwrap().push(event.clone());
        *res = Response::text(200, event.as_str());
    }
}

/// Handler answering 200 with a fixed body
pub fn text(body: &'static str) -> impl Fn(&Request, &mut Response) + Send + Sync + 'static {
    move |_req: &Request, res: &mut Response| {
        *res = Response::text(200, body);
    }
}

pub fn call(router: &Router, method: Method, uri: &str) -> Response {
    let mut req = Request::new(method, uri);
    router.handle(&mut req)
}

pub fn body(router: &Router, method: Method, uri: &str) -> Option<String> {
    let res = call(router, method, uri);
    (res.status == 200).then(|| res.body_str().unwrap_or_default().to_string())
}
