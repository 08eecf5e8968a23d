//! Built-in demo API used by the CLI.

use serde_json::json;

use crate::dispatcher::{Request, Response};
use crate::middleware::{bearer_auth, cors, logger, request_span};
use crate::router::{Router, RouterError, Routes};
use crate::runtime_config::RouterConfig;

/// Value the admin routes expect in the `authorization` header
pub const DEMO_TOKEN: &str = "Bearer demo-token";

/// A small user/post API that exercises every kind of segment and scope
///
/// ```text
/// GET    /health
/// GET    /api/users
/// POST   /api/users
/// GET    /api/users/me                        literal beats {id}
/// GET    /api/users/{id:^[0-9]+$}             numeric ids only
/// GET    /api/users/{name}                    any other single segment
/// GET    /api/users/{id:^[0-9]+$}/posts/{slug}
/// DELETE /admin/cache                         bearer auth
/// GET    /admin/stats                         bearer auth + per-route logger
/// ```
///
/// The syntax characters in `config` are honoured, so the patterns are
/// rewritten with the configured brackets and separator.
///
/// # Errors
///
/// Fails when `config` describes an ambiguous parameter syntax.
pub fn demo_router(config: &RouterConfig) -> Result<Router, RouterError> {
    let mut router = Router::from_config(config)?;
    let p = |name: &str| format!("{}{}{}", config.param_open, name, config.param_close);
    let numeric = format!(
        "{}id{}^[0-9]+${}",
        config.param_open, config.regex_separator, config.param_close
    );

    router.use_middleware(request_span());

    router.get("/health", |_req: &Request, res: &mut Response| {
        *res = Response::json(200, json!({ "status": "ok" }));
    })?;

    {
        let mut api = router.prefix("/api").sub_router();
        api.use_middleware(cors());

        let mut users = api.prefix("/users").sub_router();
        users.get("/", |_req: &Request, res: &mut Response| {
            *res = Response::json(200, json!([{ "id": 1 }, { "id": 2 }]));
        })?;
        users.post("/", |req: &Request, res: &mut Response| {
            let size = req.body.as_ref().map_or(0, Vec::len);
            *res = Response::json(201, json!({ "created": true, "bytes": size }));
        })?;
        users.get("/me", |_req: &Request, res: &mut Response| {
            *res = Response::json(200, json!({ "id": "me" }));
        })?;
        users.get(&format!("/{numeric}"), |req: &Request, res: &mut Response| {
            *res = Response::json(200, json!({ "id": req.param("id") }));
        })?;
        users.get(&format!("/{}", p("name")), |req: &Request, res: &mut Response| {
            *res = Response::json(200, json!({ "name": req.param("name") }));
        })?;
        users.get(
            &format!("/{numeric}/posts/{}", p("slug")),
            |req: &Request, res: &mut Response| {
                *res = Response::json(
                    200,
                    json!({ "user": req.param("id"), "post": req.param("slug") }),
                );
            },
        )?;
    }

    {
        let mut admin = router.prefix("/admin").sub_router();
        admin.use_middleware(bearer_auth(DEMO_TOKEN));
        admin.delete("/cache", |_req: &Request, res: &mut Response| {
            *res = Response::text(202, "cache cleared");
        })?;
        admin
            .with(logger())
            .get("/stats", |_req: &Request, res: &mut Response| {
                *res = Response::json(200, json!({ "uptime_s": 0 }));
            })?;
    }

    Ok(router)
}
