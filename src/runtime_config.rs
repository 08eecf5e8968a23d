//! # Runtime Configuration Module
//!
//! Router settings loaded from environment variables or a YAML file.
//!
//! ## Environment Variables
//!
//! | Variable                   | Default         | Meaning                                  |
//! |----------------------------|-----------------|------------------------------------------|
//! | `RADIXMUX_PARAM_OPEN`      | `{`             | opening bracket of a parameter segment   |
//! | `RADIXMUX_PARAM_CLOSE`     | `}`             | closing bracket of a parameter segment   |
//! | `RADIXMUX_REGEX_SEPARATOR` | `:`             | separates name from regex constraint     |
//! | `RADIXMUX_NOT_FOUND_BODY`  | `404 not found` | body of the default not-found response   |
//! | `RADIXMUX_LOG_ROUTES`      | `true`          | log each route as it is registered       |
//!
//! Absent or malformed values fall back to the default.
//!
//! ## YAML
//!
//! ```yaml
//! param_open: "<"
//! param_close: ">"
//! regex_separator: "|"
//! not_found_body: "nothing here"
//! log_routes: false
//! ```
//!
//! Every field is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::Path;

use crate::router::PatternSyntax;

/// Router configuration error
///
/// Returned by [`RouterConfig::validate`] when the pattern syntax would be
/// ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two of open bracket, close bracket and separator are the same character
    DuplicateSyntaxChar {
        /// The repeated character
        ch: char,
    },
    /// `/` cannot be used in the pattern syntax, paths are split on it
    SlashInSyntax,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DuplicateSyntaxChar { ch } => {
                write!(
                    f,
                    "Router configuration error: '{}' is used more than once in the parameter syntax. \
                    Open bracket, close bracket and separator must be distinct.",
                    ch
                )
            }
            ConfigError::SlashInSyntax => {
                write!(
                    f,
                    "Router configuration error: '/' cannot be part of the parameter syntax."
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Opening bracket of a parameter segment
    pub param_open: char,
    /// Closing bracket of a parameter segment
    pub param_close: char,
    /// Separates a parameter name from its regex constraint
    pub regex_separator: char,
    /// Body of the default not-found response
    pub not_found_body: String,
    /// Log every route at `info` as it is registered
    pub log_routes: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            param_open: '{',
            param_close: '}',
            regex_separator: ':',
            not_found_body: "404 not found".to_string(),
            log_routes: true,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup (the environment
    /// in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let single_char = |key: &str, default: char| {
            lookup(key)
                .and_then(|val| {
                    let mut chars = val.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => Some(ch),
                        _ => None,
                    }
                })
                .unwrap_or(default)
        };

        Self {
            param_open: single_char("RADIXMUX_PARAM_OPEN", defaults.param_open),
            param_close: single_char("RADIXMUX_PARAM_CLOSE", defaults.param_close),
            regex_separator: single_char("RADIXMUX_REGEX_SEPARATOR", defaults.regex_separator),
            not_found_body: lookup("RADIXMUX_NOT_FOUND_BODY").unwrap_or(defaults.not_found_body),
            log_routes: lookup("RADIXMUX_LOG_ROUTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_routes),
        }
    }

    /// Parse configuration from a YAML document
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML or an invalid parameter syntax.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: RouterConfig =
            serde_yaml::from_str(yaml).context("Failed to parse router configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read router configuration {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Check that the parameter syntax is unambiguous
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when characters repeat or include `/`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chars = [self.param_open, self.param_close, self.regex_separator];
        if chars.contains(&'/') {
            return Err(ConfigError::SlashInSyntax);
        }
        for (i, ch) in chars.iter().enumerate() {
            if chars[i + 1..].contains(ch) {
                return Err(ConfigError::DuplicateSyntaxChar { ch: *ch });
            }
        }
        Ok(())
    }

    /// The parameter syntax described by this configuration
    #[must_use]
    pub fn syntax(&self) -> PatternSyntax {
        PatternSyntax {
            open: self.param_open,
            close: self.param_close,
            separator: self.regex_separator,
        }
    }
}
