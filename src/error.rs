// SPDX-License-Identifier: MIT

//! Typed error handling for tagsort-rs
//!
//! Only the configuration and vault-scanning layers produce errors. The
//! expression engine in [`crate::expr`] never fails: malformed expressions
//! degrade into a boolean result instead.

use thiserror::Error;

/// Top-level error type for tagsort-rs
#[derive(Debug, Error)]
pub enum TagsortError {
    /// Configuration errors (bad rules file, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid regular expression in a rule or exclusion
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Directory traversal errors
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl TagsortError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a pattern error
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
