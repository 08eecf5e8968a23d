use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/{id}/posts/{postId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the hot path.
///
/// Param names are `Arc<str>` shared with the route tree, so binding a
/// name is an atomic increment rather than a string copy. Values are
/// per-request data taken from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Per-request path parameter store
///
/// Created empty for every request, filled while the route tree resolves
/// the path, and dropped with the request. It is owned by a single request
/// invocation, so it needs no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: ParamVec,
}

impl RequestParams {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`.
    ///
    /// Bindings are appended; when a name is bound more than once the
    /// latest binding is the one [`get`](Self::get) returns.
    pub fn bind(&mut self, name: Arc<str>, value: impl Into<String>) {
        self.entries.push((name, value.into()));
    }

    /// Get a parameter by name
    ///
    /// Uses "last write wins" semantics: for `/org/{id}/user/{id}` the user
    /// id is returned, not the org id.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a binding exists for `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of bindings
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameter has been bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bindings in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Copy the bindings into a `HashMap`
    /// Note: This allocates - use get() in hot paths instead
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Drop every binding made after the store had `len` entries.
    /// Used to discard the bindings of a lookup that missed.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}

impl From<ParamVec> for RequestParams {
    fn from(entries: ParamVec) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let params = RequestParams::new();
        assert!(params.is_empty());
        assert_eq!(params.get("id"), None);
    }

    #[test]
    fn test_bind_and_get() {
        let mut params = RequestParams::new();
        params.bind(Arc::from("id"), "42");
        params.bind(Arc::from("slug"), "hello");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("slug"), Some("hello"));
        assert!(params.contains("slug"));
        assert!(!params.contains("missing"));
    }

    #[test]
    fn test_last_binding_wins() {
        let mut params = RequestParams::new();
        params.bind(Arc::from("id"), "org-1");
        params.bind(Arc::from("id"), "user-7");
        assert_eq!(params.get("id"), Some("user-7"));
        assert_eq!(params.to_map().get("id").map(String::as_str), Some("user-7"));
    }

    #[test]
    fn test_truncate_undoes_bindings() {
        let mut params = RequestParams::new();
        params.bind(Arc::from("a"), "1");
        let mark = params.len();
        params.bind(Arc::from("b"), "2");
        params.truncate(mark);
        assert_eq!(params.get("b"), None);
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("a", "1")]);
    }
}
