//! Segment classification for route patterns.
//!
//! A route such as `/users/{id:^[0-9]+$}/posts` is tokenized on `/` (empty
//! tokens are dropped, so leading, trailing and doubled slashes carry no
//! meaning) and every token is classified as either a literal or a
//! parameter. Parameter constraints are compiled once per distinct source
//! string and shared through the parser's regex cache.

use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::error::PatternError;

/// Bracket and separator characters recognised in parameter segments
///
/// With the defaults a parameter reads `{name}` or `{name:regex}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSyntax {
    /// Opening bracket of a parameter segment
    pub open: char,
    /// Closing bracket of a parameter segment
    pub close: char,
    /// Separates the parameter name from its regex constraint
    pub separator: char,
}

impl Default for PatternSyntax {
    fn default() -> Self {
        Self {
            open: '{',
            close: '}',
            separator: ':',
        }
    }
}

/// A parameter segment: a name plus an optional regex constraint
#[derive(Debug, Clone)]
pub struct ParamSpec {
    name: Arc<str>,
    constraint: Option<Arc<Regex>>,
    raw: Arc<str>,
}

impl ParamSpec {
    /// Name the matched text is bound to
    #[must_use]
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    /// Source of the regex constraint, if any
    #[must_use]
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref().map(Regex::as_str)
    }

    /// The segment text as it was registered (e.g. `{id:^[0-9]+$}`)
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this parameter carries a regex constraint
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.constraint.is_some()
    }

    /// Check a single request segment against this parameter.
    ///
    /// Empty segments never match. The constraint is tested with
    /// `Regex::is_match`, so anchoring is up to the pattern author.
    #[inline]
    #[must_use]
    pub fn accepts(&self, segment: &str) -> bool {
        if segment.is_empty() {
            return false;
        }
        match &self.constraint {
            Some(re) => re.is_match(segment),
            None => true,
        }
    }

    /// Two specs denote the same tree node when name and constraint source agree
    pub(crate) fn same_as(&self, other: &ParamSpec) -> bool {
        self.name == other.name && self.constraint() == other.constraint()
    }
}

/// Classification of one path segment
#[derive(Debug, Clone)]
pub enum Segment {
    /// Matches only the identical text
    Literal(String),
    /// Matches any non-empty segment accepted by the spec
    Param(ParamSpec),
}

/// Split a path into its non-empty `/`-separated tokens
pub fn tokenize(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Rewrite a request path into the canonical `/a/b` form used by the tree.
///
/// Already-canonical paths are borrowed. Everything else (`""`, `a/b`,
/// `/a//b/`) is rebuilt from its tokens; a path with no tokens becomes `/`.
#[must_use]
pub fn normalize(path: &str) -> Cow<'_, str> {
    let canonical = path == "/"
        || (path.starts_with('/') && !path.ends_with('/') && !path.contains("//"));
    if canonical {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len() + 1);
    for token in tokenize(path) {
        out.push('/');
        out.push_str(token);
    }
    if out.is_empty() {
        out.push('/');
    }
    Cow::Owned(out)
}

/// Classifies route segments and caches compiled constraints
#[derive(Debug, Default)]
pub struct PatternParser {
    syntax: PatternSyntax,
    regex_cache: HashMap<String, Arc<Regex>>,
}

impl PatternParser {
    /// Create a parser for the given syntax
    #[must_use]
    pub fn new(syntax: PatternSyntax) -> Self {
        Self {
            syntax,
            regex_cache: HashMap::new(),
        }
    }

    /// The syntax this parser recognises
    #[must_use]
    pub fn syntax(&self) -> PatternSyntax {
        self.syntax
    }

    /// Number of distinct constraints compiled so far
    #[must_use]
    pub fn cached_regex_count(&self) -> usize {
        self.regex_cache.len()
    }

    /// Classify a single segment.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when a parameter has no name or its
    /// constraint does not compile.
    pub fn classify(&mut self, segment: &str) -> Result<Segment, PatternError> {
        let inner = segment
            .strip_prefix(self.syntax.open)
            .and_then(|s| s.strip_suffix(self.syntax.close));
        let Some(inner) = inner else {
            return Ok(Segment::Literal(segment.to_string()));
        };

        let (name, pattern) = match inner.split_once(self.syntax.separator) {
            Some((name, pattern)) => (name, Some(pattern).filter(|p| !p.is_empty())),
            None => (inner, None),
        };
        if name.is_empty() {
            return Err(PatternError::EmptyParamName {
                segment: segment.to_string(),
            });
        }

        let constraint = match pattern {
            Some(pattern) => Some(self.compile(segment, pattern)?),
            None => None,
        };

        Ok(Segment::Param(ParamSpec {
            name: Arc::from(name),
            constraint,
            raw: Arc::from(segment),
        }))
    }

    /// Tokenize and classify a whole route pattern.
    ///
    /// # Errors
    ///
    /// Fails on the first segment that [`classify`](Self::classify) rejects.
    pub fn parse_path(&mut self, path: &str) -> Result<Vec<Segment>, PatternError> {
        tokenize(path).map(|segment| self.classify(segment)).collect()
    }

    fn compile(&mut self, segment: &str, pattern: &str) -> Result<Arc<Regex>, PatternError> {
        if let Some(re) = self.regex_cache.get(pattern) {
            debug!(pattern = %pattern, "Reusing cached parameter constraint");
            return Ok(Arc::clone(re));
        }
        let re = Regex::new(pattern).map_err(|source| PatternError::InvalidRegex {
            segment: segment.to_string(),
            pattern: pattern.to_string(),
            source,
        })?;
        let re = Arc::new(re);
        self.regex_cache
            .insert(pattern.to_string(), Arc::clone(&re));
        Ok(re)
    }
}
