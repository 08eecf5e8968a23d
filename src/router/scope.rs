//! Route-registration scopes.
//!
//! A scope is a view onto the root [`Router`] that carries a path prefix and
//! a middleware list. Every route registered through a scope ends up in the
//! root's tree with the scope's full prefix prepended and the scope's full
//! middleware chain (root first, innermost last) wrapped around its handler.
//!
//! Scopes hold `&mut Router`, so while a child scope is alive its parent
//! cannot be touched. That makes the middleware a child inherits at creation
//! identical to what it would observe through a live parent link: nothing
//! can change it underneath the child.

use http::Method;
use std::sync::Arc;

use super::core::Router;
use super::error::RouterError;
use crate::dispatcher::{Handler, Request, Response};
use crate::middleware::Middleware;

/// Join a prefix and a path at a segment boundary
pub(crate) fn join_path(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }
    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let mut joined = String::with_capacity(prefix.len() + path.len() + 1);
    joined.push_str(prefix);
    joined.push('/');
    joined.push_str(path);
    joined
}

/// Registration capability shared by the root router and every nested scope
///
/// Implementors provide [`register`](Routes::register) and the three scope
/// operations; the method shorthands are built on top of them.
pub trait Routes {
    /// Register `handler` for `method` and `path`, wrapped first in this
    /// scope's middleware chain and then, innermost, in `route_middleware`
    ///
    /// Registering the same method and pattern again replaces the handler.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Pattern`] when a segment of the full path
    /// carries an invalid regex or an empty parameter name.
    fn register(
        &mut self,
        method: Method,
        path: &str,
        handler: Handler,
        route_middleware: &[Middleware],
    ) -> Result<(), RouterError>;

    /// Append middleware to this scope
    ///
    /// Applies to routes registered after the call, in this scope and in
    /// scopes created from it afterwards.
    fn use_middleware(&mut self, middleware: Middleware);

    /// Child scope with the same prefix and an empty middleware list of its
    /// own; this scope's middleware wraps the child's
    fn sub_router(&mut self) -> Scope<'_>;

    /// Start a child scope whose prefix is this scope's prefix plus `prefix`
    fn prefix(&mut self, prefix: &str) -> ScopeBuilder<'_>;

    /// Register a closure for any method
    fn route<F>(&mut self, method: Method, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
        Self: Sized,
    {
        self.register(method, path, Arc::new(handler), &[])
    }

    /// Register a `GET` route
    fn get<F>(&mut self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
        Self: Sized,
    {
        self.route(Method::GET, path, handler)
    }

    /// Register a `POST` route
    fn post<F>(&mut self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
        Self: Sized,
    {
        self.route(Method::POST, path, handler)
    }

    /// Register a `PUT` route
    fn put<F>(&mut self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
        Self: Sized,
    {
        self.route(Method::PUT, path, handler)
    }

    /// Register a `DELETE` route
    fn delete<F>(&mut self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
        Self: Sized,
    {
        self.route(Method::DELETE, path, handler)
    }

    /// Register a `PATCH` route
    fn patch<F>(&mut self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
        Self: Sized,
    {
        self.route(Method::PATCH, path, handler)
    }

    /// Declare a single route with extra middleware applied innermost
    ///
    /// The middleware does not become part of this scope.
    fn with(&mut self, middleware: Middleware) -> RouteDeclaration<'_, Self>
    where
        Self: Sized,
    {
        RouteDeclaration {
            target: self,
            middleware: vec![middleware],
        }
    }
}

/// A nested registration scope
///
/// Created by [`Routes::sub_router`] or [`ScopeBuilder::sub_router`].
pub struct Scope<'r> {
    root: &'r mut Router,
    prefix: String,
    inherited: Vec<Middleware>,
    middleware: Vec<Middleware>,
}

impl<'r> Scope<'r> {
    pub(crate) fn new(root: &'r mut Router, prefix: String, inherited: Vec<Middleware>) -> Self {
        Self {
            root,
            prefix,
            inherited,
            middleware: Vec::new(),
        }
    }

    /// Prefix applied to routes registered here, relative to the root's own
    #[must_use]
    pub fn current_prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of middleware wrapping routes registered here, not counting
    /// the root router's own
    #[must_use]
    pub fn middleware_depth(&self) -> usize {
        self.inherited.len() + self.middleware.len()
    }

    fn chain(&self) -> Vec<Middleware> {
        self.inherited
            .iter()
            .chain(&self.middleware)
            .map(Arc::clone)
            .collect()
    }
}

impl Routes for Scope<'_> {
    fn register(
        &mut self,
        method: Method,
        path: &str,
        handler: Handler,
        route_middleware: &[Middleware],
    ) -> Result<(), RouterError> {
        let full_path = join_path(&self.prefix, path);
        let mut middleware = self.chain();
        middleware.extend(route_middleware.iter().map(Arc::clone));
        self.root.register(method, &full_path, handler, &middleware)
    }

    fn use_middleware(&mut self, middleware: Middleware) {
        self.middleware.push(middleware);
    }

    fn sub_router(&mut self) -> Scope<'_> {
        let inherited = self.chain();
        Scope::new(&mut *self.root, self.prefix.clone(), inherited)
    }

    fn prefix(&mut self, prefix: &str) -> ScopeBuilder<'_> {
        let inherited = self.chain();
        let prefix = join_path(&self.prefix, prefix);
        ScopeBuilder::new(&mut *self.root, prefix, inherited)
    }
}

/// Pending child scope produced by [`Routes::prefix`]
#[must_use = "call .sub_router() to obtain the prefixed scope"]
pub struct ScopeBuilder<'r> {
    root: &'r mut Router,
    prefix: String,
    inherited: Vec<Middleware>,
}

impl<'r> ScopeBuilder<'r> {
    pub(crate) fn new(root: &'r mut Router, prefix: String, inherited: Vec<Middleware>) -> Self {
        Self {
            root,
            prefix,
            inherited,
        }
    }

    /// The prefixed child scope
    pub fn sub_router(self) -> Scope<'r> {
        Scope::new(self.root, self.prefix, self.inherited)
    }
}

/// Pending single-route registration produced by [`Routes::with`]
#[must_use = "register a route to apply the middleware"]
pub struct RouteDeclaration<'a, R: Routes> {
    target: &'a mut R,
    middleware: Vec<Middleware>,
}

impl<'a, R: Routes> RouteDeclaration<'a, R> {
    /// Add another middleware, nested inside the ones already declared
    pub fn with(mut self, middleware: Middleware) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Register the route on the scope this declaration came from
    ///
    /// # Errors
    ///
    /// See [`Routes::register`].
    pub fn route<F>(self, method: Method, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.target
            .register(method, path, Arc::new(handler), &self.middleware)
    }

    /// Register a `GET` route
    pub fn get<F>(self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.route(Method::GET, path, handler)
    }

    /// Register a `POST` route
    pub fn post<F>(self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.route(Method::POST, path, handler)
    }

    /// Register a `PUT` route
    pub fn put<F>(self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.route(Method::PUT, path, handler)
    }

    /// Register a `DELETE` route
    pub fn delete<F>(self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.route(Method::DELETE, path, handler)
    }

    /// Register a `PATCH` route
    pub fn patch<F>(self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.route(Method::PATCH, path, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "/users"), "/users");
        assert_eq!(join_path("/api", "/users"), "/api/users");
        assert_eq!(join_path("/api/", "users"), "/api/users");
        assert_eq!(join_path("/api", ""), "/api/");
        assert_eq!(join_path("/", "/"), "/");
    }
}
