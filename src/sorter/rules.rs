// SPDX-License-Identifier: MIT

//! Rule resolution
//!
//! Walks the ordered grouping rules for one note and picks the destination
//! folder of the first rule whose expression matches. Excluded folders and
//! the per-note disable flag are checked before any rule runs.

use std::path::Path;

use regex::Regex;

use super::config::SorterConfig;
use super::matcher::literal_matches;
use super::note::NoteMeta;
use crate::expr;

/// Ordered grouping rules over one configuration.
pub struct RuleSet<'a> {
    config: &'a SorterConfig,
}

impl<'a> RuleSet<'a> {
    pub fn new(config: &'a SorterConfig) -> Self {
        Self { config }
    }

    /// Whether the note's current location is excluded from sorting.
    pub fn is_excluded(&self, note_path: &Path) -> bool {
        self.config
            .excluded_folders
            .iter()
            .filter(|folder| !folder.trim().is_empty())
            .any(|folder| {
                if self.config.regex_excluded_folder {
                    match Regex::new(folder) {
                        Ok(re) => re.is_match(&note_path.to_string_lossy()),
                        Err(e) => {
                            log::warn!("Skipping invalid exclusion pattern '{}': {}", folder, e);
                            false
                        }
                    }
                } else {
                    note_path.starts_with(folder)
                }
            })
    }

    /// Destination folder for the note, or `None` when no rule matches.
    ///
    /// Rules are checked in order from the top; the first match wins.
    pub fn resolve(&self, note: &NoteMeta) -> Option<&'a str> {
        if note.is_disabled() {
            log::debug!("{} opted out via frontmatter", note.path.display());
            return None;
        }
        if self.is_excluded(&note.path) {
            log::debug!("{} is under an excluded folder", note.path.display());
            return None;
        }

        self.config
            .rules
            .iter()
            // Empty rows come from unfilled settings entries.
            .filter(|rule| !rule.pattern.trim().is_empty() && !rule.folder.trim().is_empty())
            .find(|rule| {
                expr::matches(&rule.pattern, |literal| {
                    literal_matches(literal, note, self.config)
                })
            })
            .map(|rule| rule.folder.as_str())
    }
}
