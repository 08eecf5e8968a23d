//! Radix tree implementation for HTTP route matching
//!
//! Each HTTP method owns an independent tree. Literal text is stored
//! compressed: routes that begin identically share one edge, and an edge is
//! split only where two routes diverge, so `/hello`, `/hell`, `/he` and
//! `/hey` end up as
//!
//! ```text
//! "/he" (handler)
//! ├── "ll" (handler)
//! │   └── "o" (handler)
//! └── "y" (handler)
//! ```
//!
//! Parameter segments live in separate child lists hung off the node whose
//! fragment ends at the preceding `/`. A parameter consumes exactly one
//! request segment.
//!
//! ## Precedence
//!
//! At every node literal children are tried first. Because sibling literal
//! fragments never share a prefix, at most one literal child can match the
//! remaining text. Once a literal has consumed the whole current segment
//! the walk is committed to it: if its subtree fails, so does the lookup.
//! Parameter children are tried only when no literal consumed the segment
//! (no literal child at all, or one that covered only part of it, as `b`
//! against `bc`), in this order:
//!
//! 1. regex-constrained parameters, most recently inserted first
//! 2. unconstrained parameters, most recently inserted first
//!
//! The first parameter whose constraint accepts the segment is taken and
//! the walk never returns to try another. Landing on a node without a value
//! is a miss, so a prefix of a registered route is not itself routable.
//!
//! ## Performance Characteristics
//!
//! - Insertion: O(k) where k is the path length
//! - Lookup: O(k); no node is visited twice
//! - No allocation during lookup beyond the parameter bindings themselves

use http::Method;
use std::mem;
use std::sync::Arc;

use super::pattern::{ParamSpec, Segment};
use crate::dispatcher::RequestParams;

/// A tokenized route ready for insertion.
///
/// Consecutive literal segments are merged into one text run that includes
/// the `/` separators (`/users/` ... `/posts`), so the radix tree can
/// compress across segment boundaries.
enum Piece {
    Literal(String),
    Param(ParamSpec),
}

fn pieces(segments: Vec<Segment>) -> Vec<Piece> {
    let mut out = Vec::with_capacity(segments.len() + 1);
    let mut text = String::new();
    for segment in segments {
        text.push('/');
        match segment {
            Segment::Literal(literal) => text.push_str(&literal),
            Segment::Param(spec) => {
                out.push(Piece::Literal(mem::take(&mut text)));
                out.push(Piece::Param(spec));
            }
        }
    }
    if out.is_empty() && text.is_empty() {
        text.push('/');
    }
    if !text.is_empty() {
        out.push(Piece::Literal(text));
    }
    out
}

/// Length in bytes of the longest common prefix, on a char boundary
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, x), _)| i + x.len_utf8())
}

/// Node in the radix tree
#[derive(Debug, Clone)]
struct RadixNode<T> {
    /// Literal text owned by this node; empty for parameter nodes
    path: String,
    /// Set when this node consumes one segment as a parameter
    param: Option<ParamSpec>,
    /// Value of the route that terminates exactly here
    value: Option<T>,
    /// Literal children; no two share a non-empty prefix
    children: Vec<RadixNode<T>>,
    /// Parameter children in precedence order
    param_children: Vec<RadixNode<T>>,
}

impl<T> RadixNode<T> {
    fn new(path: String) -> Self {
        Self {
            path,
            param: None,
            value: None,
            children: Vec::new(),
            param_children: Vec::new(),
        }
    }

    fn new_param(spec: ParamSpec) -> Self {
        Self {
            path: String::new(),
            param: Some(spec),
            value: None,
            children: Vec::new(),
            param_children: Vec::new(),
        }
    }

    /// Insert the remaining pieces below this node. Returns the value that
    /// was replaced when the route already existed.
    fn insert(&mut self, pieces: &[Piece], value: T) -> Option<T> {
        match pieces.split_first() {
            None => self.value.replace(value),
            Some((Piece::Literal(text), rest)) => self.insert_literal(text, rest, value),
            Some((Piece::Param(spec), rest)) => self.param_child(spec).insert(rest, value),
        }
    }

    fn insert_literal(&mut self, text: &str, rest: &[Piece], value: T) -> Option<T> {
        for child in &mut self.children {
            let shared = common_prefix_len(&child.path, text);
            if shared == 0 {
                continue;
            }
            if shared < child.path.len() {
                child.split(shared);
            }
            return if shared == text.len() {
                child.insert(rest, value)
            } else {
                child.insert_literal(&text[shared..], rest, value)
            };
        }

        let mut node = RadixNode::new(text.to_string());
        let replaced = node.insert(rest, value);
        self.children.push(node);
        replaced
    }

    /// Shrink this node's fragment to `path[..at]`, moving everything it
    /// owned (remaining text, value, children) into a single new child.
    fn split(&mut self, at: usize) {
        let tail = RadixNode {
            path: self.path.split_off(at),
            param: None,
            value: self.value.take(),
            children: mem::take(&mut self.children),
            param_children: mem::take(&mut self.param_children),
        };
        self.children.push(tail);
    }

    /// Find the parameter child for `spec`, creating it in precedence order
    fn param_child(&mut self, spec: &ParamSpec) -> &mut RadixNode<T> {
        let existing = self
            .param_children
            .iter()
            .position(|child| child.param.as_ref().is_some_and(|p| p.same_as(spec)));

        let index = match existing {
            Some(index) => index,
            None => {
                // Newest first within its group; constrained before unconstrained.
                let index = if spec.is_constrained() {
                    0
                } else {
                    self.param_children
                        .iter()
                        .take_while(|c| c.param.as_ref().is_some_and(ParamSpec::is_constrained))
                        .count()
                };
                self.param_children
                    .insert(index, RadixNode::new_param(spec.clone()));
                index
            }
        };
        &mut self.param_children[index]
    }

    /// Resolve `path` (the unconsumed remainder) below this node.
    ///
    /// On a miss returns how many bytes of `path` were matched by literal
    /// text before the walk gave up, so the caller can tell whether the
    /// literal branch had already consumed its current segment.
    fn search<'n>(&'n self, path: &str, params: &mut RequestParams) -> Result<&'n T, usize> {
        if path.is_empty() {
            return self.value.as_ref().ok_or(0);
        }
        let segment_end = path.find('/').unwrap_or(path.len());

        // Sibling literals share no prefix, so at most one can match.
        let mut matched = 0;
        if let Some((child, shared)) = self.children.iter().find_map(|c| {
            let shared = common_prefix_len(&c.path, path);
            (shared > 0).then_some((c, shared))
        }) {
            matched = if shared == child.path.len() {
                match child.search(&path[shared..], params) {
                    Ok(found) => return Ok(found),
                    Err(deeper) => shared + deeper,
                }
            } else {
                shared
            };
            // A literal that consumed the whole segment owns it
            if matched >= segment_end {
                return Err(matched);
            }
        }

        let (segment, rest) = path.split_at(segment_end);
        let child = self
            .param_children
            .iter()
            .find(|c| c.param.as_ref().is_some_and(|spec| spec.accepts(segment)))
            .ok_or(matched)?;
        if let Some(spec) = &child.param {
            params.bind(Arc::clone(spec.name()), segment);
        }
        child.search(rest, params).map_err(|_| segment_end)
    }

    /// Depth-first walk reconstructing each terminal node's full path
    fn collect<'n>(&'n self, prefix: &mut String, out: &mut Vec<(String, &'n T)>) {
        let len = prefix.len();
        match &self.param {
            Some(spec) => prefix.push_str(spec.raw()),
            None => prefix.push_str(&self.path),
        }
        if let Some(value) = &self.value {
            out.push((prefix.clone(), value));
        }
        for child in self.children.iter().chain(&self.param_children) {
            child.collect(prefix, out);
        }
        prefix.truncate(len);
    }
}

/// Per-method radix trees
///
/// Methods are independent namespaces: a path registered under `GET` is
/// invisible to `POST`. Roots are kept in first-registration order so that
/// route listings are stable.
#[derive(Debug, Clone)]
pub struct RouteTree<T> {
    roots: Vec<(Method, RadixNode<T>)>,
    len: usize,
}

impl<T> Default for RouteTree<T> {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            len: 0,
        }
    }
}

impl<T> RouteTree<T> {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn root(&self, method: &Method) -> Option<&RadixNode<T>> {
        self.roots
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, node)| node)
    }

    fn root_mut(&mut self, method: Method) -> &mut RadixNode<T> {
        let index = match self.roots.iter().position(|(m, _)| *m == method) {
            Some(index) => index,
            None => {
                self.roots.push((method, RadixNode::new(String::new())));
                self.roots.len() - 1
            }
        };
        &mut self.roots[index].1
    }

    /// Insert a classified route.
    ///
    /// Re-registering the same method and pattern replaces the previous
    /// value, which is returned.
    pub fn insert(&mut self, method: Method, segments: Vec<Segment>, value: T) -> Option<T> {
        let pieces = pieces(segments);
        let replaced = self.root_mut(method).insert(&pieces, value);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Resolve a canonical request path (see [`normalize`](super::pattern::normalize)),
    /// binding parameters into `params`.
    ///
    /// On a miss `params` is left as it was on entry.
    pub fn resolve_into<'t>(
        &'t self,
        method: &Method,
        path: &str,
        params: &mut RequestParams,
    ) -> Option<&'t T> {
        let mark = params.len();
        let found = self.root(method)?.search(path, params).ok();
        if found.is_none() {
            params.truncate(mark);
        }
        found
    }

    /// Resolve a canonical request path into its value and parameter bindings
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> Option<(&T, RequestParams)> {
        let mut params = RequestParams::new();
        let found = self.resolve_into(method, path, &mut params)?;
        Some((found, params))
    }

    /// Every registered route as `(method, full pattern, value)`, methods in
    /// first-registration order and paths in tree order
    #[must_use]
    pub fn entries(&self) -> Vec<(&Method, String, &T)> {
        let mut out = Vec::new();
        for (method, root) in &self.roots {
            let mut found = Vec::new();
            root.collect(&mut String::new(), &mut found);
            out.extend(found.into_iter().map(|(path, value)| (method, path, value)));
        }
        out
    }

    /// Route listing in the `"{METHOD} {path}"` format
    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(method, path, _)| format!("{} {}", method, path))
            .collect()
    }

    /// Number of registered routes across all methods
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no route has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::pattern::{normalize, PatternParser};
    use std::collections::HashSet;

    fn tree(routes: &[(Method, &str, &'static str)]) -> RouteTree<&'static str> {
        let mut parser = PatternParser::default();
        let mut tree = RouteTree::new();
        for (method, path, name) in routes {
            let segments = parser.parse_path(path).unwrap();
            tree.insert(method.clone(), segments, *name);
        }
        tree
    }

    fn lookup<'t>(
        tree: &'t RouteTree<&'static str>,
        method: Method,
        path: &str,
    ) -> Option<(&'t &'static str, RequestParams)> {
        tree.resolve(&method, &normalize(path))
    }

    fn handler_at(tree: &RouteTree<&'static str>, method: Method, path: &str) -> Option<&'static str> {
        lookup(tree, method, path).map(|(h, _)| *h)
    }

    /// Walk the tree asserting that no two sibling literals share a prefix
    fn assert_maximal_compression<T>(node: &RadixNode<T>) {
        for (i, a) in node.children.iter().enumerate() {
            for b in node.children.iter().skip(i + 1) {
                assert_eq!(
                    common_prefix_len(&a.path, &b.path),
                    0,
                    "siblings {:?} and {:?} share a prefix",
                    a.path,
                    b.path
                );
            }
            assert_maximal_compression(a);
        }
        for p in &node.param_children {
            assert_maximal_compression(p);
        }
    }

    #[test]
    fn test_simple_route() {
        let t = tree(&[(Method::GET, "/health", "health_check")]);
        let (handler, params) = lookup(&t, Method::GET, "/health").unwrap();
        assert_eq!(*handler, "health_check");
        assert!(params.is_empty());
    }

    #[test]
    fn test_root_route() {
        let t = tree(&[(Method::GET, "/", "root"), (Method::GET, "/users", "users")]);
        assert_eq!(handler_at(&t, Method::GET, "/"), Some("root"));
        assert_eq!(handler_at(&t, Method::GET, ""), Some("root"));
        assert_eq!(handler_at(&t, Method::GET, "/users"), Some("users"));
    }

    #[test]
    fn test_with_parameter() {
        let t = tree(&[(Method::GET, "/users/{id}", "get_user")]);
        let (handler, params) = lookup(&t, Method::GET, "/users/123").unwrap();
        assert_eq!(*handler, "get_user");
        assert_eq!(params.get("id"), Some("123"));
    }

    #[test]
    fn test_multiple_parameters() {
        let t = tree(&[(Method::GET, "/users/{user_id}/posts/{post_id}", "get_post")]);
        let (handler, params) = lookup(&t, Method::GET, "/users/123/posts/456").unwrap();
        assert_eq!(*handler, "get_post");
        assert_eq!(params.get("user_id"), Some("123"));
        assert_eq!(params.get("post_id"), Some("456"));
    }

    #[test]
    fn test_method_namespaces() {
        let t = tree(&[
            (Method::GET, "/items", "get_items"),
            (Method::POST, "/items", "create_item"),
        ]);
        assert_eq!(handler_at(&t, Method::GET, "/items"), Some("get_items"));
        assert_eq!(handler_at(&t, Method::POST, "/items"), Some("create_item"));
        assert_eq!(handler_at(&t, Method::PUT, "/items"), None);
    }

    #[test]
    fn test_no_match() {
        let t = tree(&[(Method::GET, "/users/{id}", "get_user")]);
        assert!(lookup(&t, Method::GET, "/posts/123").is_none());
        assert!(lookup(&t, Method::POST, "/users/123").is_none());
        assert!(lookup(&t, Method::GET, "/users").is_none());
        assert!(lookup(&t, Method::GET, "/users/1/extra").is_none());
    }

    #[test]
    fn test_prefix_of_route_is_not_routable() {
        let t = tree(&[(Method::GET, "/api/v1/users", "users")]);
        assert!(lookup(&t, Method::GET, "/api/v1").is_none());
        assert!(lookup(&t, Method::GET, "/api").is_none());
    }

    #[test]
    fn test_prefix_compression_transparency() {
        let paths = ["/hello", "/hell", "/he", "/hey"];
        let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1], [1, 3, 0, 2]];
        for order in orders {
            let routes: Vec<_> = order
                .iter()
                .map(|&i| (Method::GET, paths[i], paths[i]))
                .collect();
            let t = tree(&routes);
            for path in paths {
                assert_eq!(handler_at(&t, Method::GET, path), Some(path), "order {order:?}");
            }
            let listed: HashSet<String> = t.routes().into_iter().collect();
            let expected: HashSet<String> = paths.iter().map(|p| format!("GET {p}")).collect();
            assert_eq!(listed, expected);
            assert_eq!(t.len(), 4);
            for (_, root) in &t.roots {
                assert_maximal_compression(root);
            }
        }
    }

    #[test]
    fn test_split_preserves_subtree() {
        let t = tree(&[
            (Method::GET, "/users/{id}/posts", "user_posts"),
            (Method::GET, "/users", "users"),
            (Method::GET, "/use", "use"),
        ]);
        assert_eq!(handler_at(&t, Method::GET, "/users/9/posts"), Some("user_posts"));
        assert_eq!(handler_at(&t, Method::GET, "/users"), Some("users"));
        assert_eq!(handler_at(&t, Method::GET, "/use"), Some("use"));
        assert_eq!(handler_at(&t, Method::GET, "/user"), None);
    }

    #[test]
    fn test_partial_fragment_is_dead_end() {
        let t = tree(&[(Method::GET, "/hello", "hello")]);
        assert!(lookup(&t, Method::GET, "/he").is_none());
        assert!(lookup(&t, Method::GET, "/hellothere").is_none());
    }

    #[test]
    fn test_literal_precedence_either_order() {
        for routes in [
            [(Method::GET, "/a/b", "literal"), (Method::GET, "/a/{x}", "param")],
            [(Method::GET, "/a/{x}", "param"), (Method::GET, "/a/b", "literal")],
        ] {
            let t = tree(&routes);
            let (handler, params) = lookup(&t, Method::GET, "/a/b").unwrap();
            assert_eq!(*handler, "literal");
            assert!(!params.contains("x"));
            assert_eq!(handler_at(&t, Method::GET, "/a/c"), Some("param"));
        }
    }

    #[test]
    fn test_parameter_fallback_when_literal_only_covers_prefix() {
        let t = tree(&[(Method::GET, "/a/b", "literal"), (Method::GET, "/a/{x}", "param")]);
        let (handler, params) = lookup(&t, Method::GET, "/a/bc").unwrap();
        assert_eq!(*handler, "param");
        assert_eq!(params.get("x"), Some("bc"));
    }

    #[test]
    fn test_literal_owning_segment_is_not_abandoned() {
        let t = tree(&[
            (Method::GET, "/files/new/edit", "edit_new"),
            (Method::GET, "/files/{id}", "file"),
        ]);
        assert!(lookup(&t, Method::GET, "/files/new").is_none());
        assert_eq!(handler_at(&t, Method::GET, "/files/new/edit"), Some("edit_new"));
        assert_eq!(handler_at(&t, Method::GET, "/files/old"), Some("file"));
    }

    #[test]
    fn test_literal_committed_across_split_fragments() {
        let t = tree(&[
            (Method::GET, "/a/b", "b"),
            (Method::GET, "/a/bcd/e", "bcd_e"),
            (Method::GET, "/a/{x}", "param"),
        ]);
        assert_eq!(handler_at(&t, Method::GET, "/a/b"), Some("b"));
        assert!(lookup(&t, Method::GET, "/a/bcd").is_none());
        assert_eq!(handler_at(&t, Method::GET, "/a/bc"), Some("param"));
        assert_eq!(handler_at(&t, Method::GET, "/a/bcx"), Some("param"));
    }

    #[test]
    fn test_regex_gate() {
        let t = tree(&[
            (Method::GET, "/items/{id:^[0-9]+$}", "by_id"),
            (Method::GET, "/items/{name}", "by_name"),
        ]);
        let (handler, params) = lookup(&t, Method::GET, "/items/42").unwrap();
        assert_eq!(*handler, "by_id");
        assert_eq!(params.get("id"), Some("42"));
        assert!(!params.contains("name"));

        let (handler, params) = lookup(&t, Method::GET, "/items/abc").unwrap();
        assert_eq!(*handler, "by_name");
        assert_eq!(params.get("name"), Some("abc"));
        assert!(!params.contains("id"));
    }

    #[test]
    fn test_regex_gate_registration_order_independent() {
        let t = tree(&[
            (Method::GET, "/items/{name}", "by_name"),
            (Method::GET, "/items/{id:^[0-9]+$}", "by_id"),
        ]);
        assert_eq!(handler_at(&t, Method::GET, "/items/42"), Some("by_id"));
        assert_eq!(handler_at(&t, Method::GET, "/items/abc"), Some("by_name"));
    }

    #[test]
    fn test_most_recent_parameter_wins() {
        let t = tree(&[
            (Method::GET, "/v/{first}", "first"),
            (Method::GET, "/v/{second}", "second"),
        ]);
        let (handler, params) = lookup(&t, Method::GET, "/v/x").unwrap();
        assert_eq!(*handler, "second");
        assert_eq!(params.get("second"), Some("x"));

        let t = tree(&[
            (Method::GET, "/n/{a:^[0-9]+$}", "a"),
            (Method::GET, "/n/{b:^[0-9]$}", "b"),
        ]);
        assert_eq!(handler_at(&t, Method::GET, "/n/7"), Some("b"));
        assert_eq!(handler_at(&t, Method::GET, "/n/77"), Some("a"));
    }

    #[test]
    fn test_first_accepted_parameter_is_taken() {
        let t = tree(&[
            (Method::GET, "/x/{b}/other", "other"),
            (Method::GET, "/x/{a}/posts", "posts"),
        ]);
        assert!(lookup(&t, Method::GET, "/x/1/other").is_none());
        let (handler, params) = lookup(&t, Method::GET, "/x/1/posts").unwrap();
        assert_eq!(*handler, "posts");
        assert_eq!(params.get("a"), Some("1"));
        assert!(!params.contains("b"));
    }

    #[test]
    fn test_rejected_constraint_falls_to_next_parameter() {
        let t = tree(&[
            (Method::GET, "/x/{name}/other", "other"),
            (Method::GET, "/x/{id:^[0-9]+$}/posts", "posts"),
        ]);
        assert_eq!(handler_at(&t, Method::GET, "/x/abc/other"), Some("other"));
        assert!(lookup(&t, Method::GET, "/x/12/other").is_none());
    }

    #[test]
    fn test_len_counts_distinct_routes() {
        let mut parser = PatternParser::default();
        let mut t = RouteTree::new();
        for (method, path) in [
            (Method::GET, "/a"),
            (Method::POST, "/a"),
            (Method::GET, "/a/{id}"),
            (Method::GET, "/a/"),
            (Method::GET, "/a/{id}"),
        ] {
            t.insert(method, parser.parse_path(path).unwrap(), path);
        }
        assert_eq!(t.len(), 3);
        assert_eq!(t.entries().len(), 3);
    }

    #[test]
    fn test_different_param_names_same_position() {
        let t = tree(&[
            (Method::GET, "/users/{user_id}/posts", "get_user_posts"),
            (Method::GET, "/users/{id}/comments", "get_user_comments"),
        ]);
        // {id} is newer, so it owns every segment at this position
        let (handler, params) = lookup(&t, Method::GET, "/users/456/comments").unwrap();
        assert_eq!(*handler, "get_user_comments");
        assert_eq!(params.get("id"), Some("456"));
        assert!(params.get("user_id").is_none());

        assert!(lookup(&t, Method::GET, "/users/123/posts").is_none());
    }

    #[test]
    fn test_shared_parameter_node_is_reused() {
        let t = tree(&[
            (Method::GET, "/users/{id}", "user"),
            (Method::GET, "/users/{id}/posts", "posts"),
        ]);
        let root = &t.roots[0].1;
        let users = &root.children[0];
        assert_eq!(users.path, "/users/");
        assert_eq!(users.param_children.len(), 1);
    }

    #[test]
    fn test_re_registration_overwrites() {
        let mut parser = PatternParser::default();
        let mut t = RouteTree::new();
        assert_eq!(t.insert(Method::GET, parser.parse_path("/x").unwrap(), "one"), None);
        assert_eq!(
            t.insert(Method::GET, parser.parse_path("/x/").unwrap(), "two"),
            Some("one")
        );
        assert_eq!(t.len(), 1);
        assert_eq!(t.routes(), vec!["GET /x".to_string()]);
        assert_eq!(handler_at(&t, Method::GET, "/x"), Some("two"));
    }

    #[test]
    fn test_trailing_and_doubled_slashes_are_insignificant() {
        let t = tree(&[(Method::GET, "users//{id}/", "user")]);
        assert_eq!(handler_at(&t, Method::GET, "/users/5"), Some("user"));
        assert_eq!(handler_at(&t, Method::GET, "//users/5/"), Some("user"));
        assert_eq!(t.routes(), vec!["GET /users/{id}".to_string()]);
    }

    #[test]
    fn test_listing_renders_parameters() {
        let t = tree(&[
            (Method::GET, "/items/{id:^[0-9]+$}", "by_id"),
            (Method::DELETE, "/items/{id}", "delete"),
        ]);
        assert_eq!(
            t.routes(),
            vec![
                "GET /items/{id:^[0-9]+$}".to_string(),
                "DELETE /items/{id}".to_string()
            ]
        );
    }

    #[test]
    fn test_multibyte_split() {
        let t = tree(&[
            (Method::GET, "/café", "cafe"),
            (Method::GET, "/caña", "cana"),
        ]);
        assert_eq!(handler_at(&t, Method::GET, "/café"), Some("cafe"));
        assert_eq!(handler_at(&t, Method::GET, "/caña"), Some("cana"));
        assert_eq!(handler_at(&t, Method::GET, "/ca"), None);
    }

    #[test]
    fn test_empty_tree() {
        let t: RouteTree<&'static str> = RouteTree::new();
        assert!(t.is_empty());
        assert!(lookup(&t, Method::GET, "/").is_none());
        assert!(t.routes().is_empty());
    }

    #[test]
    fn test_resolve_into_leaves_params_untouched_on_miss() {
        let t = tree(&[(Method::GET, "/a/{x}/b", "ab")]);
        let mut params = RequestParams::new();
        assert!(t.resolve_into(&Method::GET, "/a/1/c", &mut params).is_none());
        assert!(params.is_empty());
    }
}
