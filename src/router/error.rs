use std::fmt;

use crate::runtime_config::ConfigError;

/// Route pattern error
///
/// Raised while a route is being registered. A pattern error is a
/// configuration mistake: the route is not inserted and startup should abort.
#[derive(Debug, Clone)]
pub enum PatternError {
    /// A parameter's regex constraint failed to compile
    InvalidRegex {
        /// The segment the constraint was taken from (e.g. `{id:[0-9+}`)
        segment: String,
        /// The regex source after the separator
        pattern: String,
        /// Compiler error reported by the `regex` crate
        source: regex::Error,
    },
    /// A parameter segment with no name (e.g. `{}` or `{:[0-9]+}`)
    EmptyParamName {
        /// The offending segment
        segment: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidRegex {
                segment,
                pattern,
                source,
            } => {
                write!(
                    f,
                    "Route pattern error: constraint '{}' in segment '{}' is not a valid regex: {}",
                    pattern, segment, source
                )
            }
            PatternError::EmptyParamName { segment } => {
                write!(
                    f,
                    "Route pattern error: parameter segment '{}' has no name",
                    segment
                )
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::InvalidRegex { source, .. } => Some(source),
            PatternError::EmptyParamName { .. } => None,
        }
    }
}

/// Error returned by route registration and router construction
#[derive(Debug, Clone)]
pub enum RouterError {
    /// A route pattern could not be parsed
    Pattern(PatternError),
    /// The router configuration is inconsistent
    Config(ConfigError),
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::Pattern(err) => write!(f, "{}", err),
            RouterError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouterError::Pattern(err) => Some(err),
            RouterError::Config(err) => Some(err),
        }
    }
}

impl From<PatternError> for RouterError {
    fn from(err: PatternError) -> Self {
        RouterError::Pattern(err)
    }
}

impl From<ConfigError> for RouterError {
    fn from(err: ConfigError) -> Self {
        RouterError::Config(err)
    }
}
