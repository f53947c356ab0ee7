// SPDX-License-Identifier: MIT

//! Sorter configuration - YAML rules file loading and parsing
//!
//! The rules file pairs boolean expressions with destination folders and
//! carries the toggles controlling tag collection and exclusion matching.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TagsortError;

/// One grouping rule: notes matching `pattern` belong in `folder`.
///
/// Rules are ordered; the first matching rule wins.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GroupingRule {
    /// Destination folder, relative to the vault root
    pub folder: String,
    /// Rule expression, e.g. `tag[work]&project[acme]`
    pub pattern: String,
}

/// Sorter settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SorterConfig {
    /// Collect tags from the frontmatter `tags`/`tag` keys
    #[serde(default = "default_true")]
    pub use_front_matter_tags: bool,
    /// Collect inline `#tag` occurrences from the note body
    #[serde(default)]
    pub use_content_tags: bool,
    /// Treat `tag[...]` values as regular expressions over the note's tags
    #[serde(default)]
    pub regex_tag_checker: bool,
    /// Treat excluded-folder entries as regular expressions over note paths
    #[serde(default)]
    pub regex_excluded_folder: bool,
    /// Ordered grouping rules, checked top to bottom
    #[serde(default)]
    pub rules: Vec<GroupingRule>,
    /// Notes under these folders are never resolved
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            use_front_matter_tags: true,
            use_content_tags: false,
            regex_tag_checker: false,
            regex_excluded_folder: false,
            rules: Vec::new(),
            excluded_folders: Vec::new(),
        }
    }
}

impl SorterConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TagsortError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a configuration from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Self, TagsortError> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Reject settings whose exclusion patterns would not compile.
    ///
    /// At match time a broken pattern only logs and matches nothing; a
    /// loaded rules file can be rejected loudly instead.
    pub fn validate(&self) -> Result<(), TagsortError> {
        if self.regex_excluded_folder {
            for folder in &self.excluded_folders {
                if folder.trim().is_empty() {
                    continue;
                }
                if let Err(e) = Regex::new(folder) {
                    return Err(TagsortError::pattern(folder, e));
                }
            }
        }
        Ok(())
    }
}
