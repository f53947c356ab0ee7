// SPDX-License-Identifier: MIT

//! Note metadata extraction
//!
//! Builds a [`NoteMeta`] from a note's raw text: the leading `---`
//! frontmatter block is parsed as YAML, and tags are collected from the
//! frontmatter `tags`/`tag` keys and/or inline `#tag` occurrences in the
//! body, per configuration.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};

use super::config::SorterConfig;

/// Frontmatter key that opts a note out of sorting entirely.
pub const DISABLE_KEY: &str = "tagsort";

static CONTENT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Za-z0-9_/][A-Za-z0-9_/-]*)").expect("content tag pattern"));

/// Metadata extracted from a single markdown note.
#[derive(Debug, Clone, Default)]
pub struct NoteMeta {
    /// Path relative to the vault root
    pub path: PathBuf,
    /// Collected tags, stored without the leading `#`
    pub tags: Vec<String>,
    /// Parsed frontmatter mapping; empty when the note has none
    pub front_matter: Mapping,
}

impl NoteMeta {
    /// Extract metadata from a note's raw text.
    pub fn from_text(path: PathBuf, text: &str, config: &SorterConfig) -> Self {
        let (block, body) = split_front_matter(text);
        let front_matter = block.map(parse_front_matter).unwrap_or_default();

        let mut tags = Vec::new();
        if config.use_front_matter_tags {
            collect_front_matter_tags(&front_matter, &mut tags);
        }
        if config.use_content_tags {
            collect_content_tags(body, &mut tags);
        }

        Self {
            path,
            tags,
            front_matter,
        }
    }

    /// Whether the note carries the given tag (leading `#` ignored).
    pub fn has_tag(&self, name: &str) -> bool {
        let name = name.trim_start_matches('#');
        self.tags.iter().any(|tag| tag == name)
    }

    /// Frontmatter value for `key`, if present.
    pub fn front_matter_value(&self, key: &str) -> Option<&Value> {
        self.front_matter.get(&Value::String(key.to_string()))
    }

    /// Whether the note opted out via `tagsort: disable` in its frontmatter.
    pub fn is_disabled(&self) -> bool {
        matches!(
            self.front_matter_value(DISABLE_KEY),
            Some(Value::String(s)) if s == "disable"
        )
    }
}

/// Split a note into its frontmatter YAML block and the remaining body.
///
/// The block is fenced by a `---` line at the very start of the note and a
/// closing `---` line. An unterminated fence means no frontmatter at all.
fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let mut offset = 0;
    let mut block_start = None;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        match block_start {
            None => {
                if line.trim_end() != "---" {
                    return (None, text);
                }
                block_start = Some(offset);
            }
            Some(start) => {
                if line.trim_end() == "---" {
                    return (Some(&text[start..line_start]), &text[offset..]);
                }
            }
        }
    }

    (None, text)
}

fn parse_front_matter(block: &str) -> Mapping {
    if block.trim().is_empty() {
        return Mapping::new();
    }
    match serde_yaml::from_str::<Mapping>(block) {
        Ok(mapping) => mapping,
        Err(e) => {
            log::warn!("Ignoring unparsable frontmatter: {}", e);
            Mapping::new()
        }
    }
}

/// Read the `tags`/`tag` frontmatter keys. The host format allows a YAML
/// list, a single string, or a comma-separated string.
fn collect_front_matter_tags(front_matter: &Mapping, tags: &mut Vec<String>) {
    for key in ["tags", "tag"] {
        match front_matter.get(&Value::String(key.to_string())) {
            Some(Value::String(s)) => {
                for part in s.split(',') {
                    push_tag(tags, part);
                }
            }
            Some(Value::Sequence(items)) => {
                for item in items {
                    match item {
                        Value::String(s) => push_tag(tags, s),
                        Value::Number(n) => push_tag(tags, &n.to_string()),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}

fn collect_content_tags(body: &str, tags: &mut Vec<String>) {
    for capture in CONTENT_TAG.captures_iter(body) {
        if let Some(m) = capture.get(1) {
            push_tag(tags, m.as_str());
        }
    }
}

fn push_tag(tags: &mut Vec<String>, raw: &str) {
    let tag = raw.trim().trim_start_matches('#');
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(text: &str, config: &SorterConfig) -> NoteMeta {
        NoteMeta::from_text(PathBuf::from("note.md"), text, config)
    }

    #[test]
    fn test_front_matter_list_tags() {
        let note = meta(
            "---\ntags:\n  - work\n  - acme\n---\nBody.\n",
            &SorterConfig::default(),
        );
        assert_eq!(note.tags, vec!["work", "acme"]);
    }

    #[test]
    fn test_front_matter_string_tags_split_on_commas() {
        let note = meta(
            "---\ntags: work, acme\n---\nBody.\n",
            &SorterConfig::default(),
        );
        assert_eq!(note.tags, vec!["work", "acme"]);
    }

    #[test]
    fn test_singular_tag_key_is_read_too() {
        let note = meta("---\ntag: journal\n---\n", &SorterConfig::default());
        assert_eq!(note.tags, vec!["journal"]);
    }

    #[test]
    fn test_hash_prefix_is_stripped() {
        let note = meta(
            "---\ntags: ['#work', '#home']\n---\n",
            &SorterConfig::default(),
        );
        assert_eq!(note.tags, vec!["work", "home"]);
        assert!(note.has_tag("work"));
        assert!(note.has_tag("#work"));
    }

    #[test]
    fn test_content_tags_require_toggle() {
        let text = "---\ntags: [meta]\n---\nInline #work and #home/desk here.\n";
        let default_note = meta(text, &SorterConfig::default());
        assert_eq!(default_note.tags, vec!["meta"]);

        let config = SorterConfig {
            use_content_tags: true,
            ..SorterConfig::default()
        };
        let note = meta(text, &config);
        assert_eq!(note.tags, vec!["meta", "work", "home/desk"]);
    }

    #[test]
    fn test_front_matter_tags_can_be_switched_off() {
        let config = SorterConfig {
            use_front_matter_tags: false,
            use_content_tags: true,
            ..SorterConfig::default()
        };
        let note = meta("---\ntags: [meta]\n---\nOnly #inline.\n", &config);
        assert_eq!(note.tags, vec!["inline"]);
    }

    #[test]
    fn test_duplicate_tags_are_collapsed() {
        let config = SorterConfig {
            use_content_tags: true,
            ..SorterConfig::default()
        };
        let note = meta("---\ntags: [work]\n---\nAgain #work.\n", &config);
        assert_eq!(note.tags, vec!["work"]);
    }

    #[test]
    fn test_no_front_matter() {
        let note = meta("Just a body, no fence.\n", &SorterConfig::default());
        assert!(note.tags.is_empty());
        assert!(note.front_matter.is_empty());
    }

    #[test]
    fn test_unterminated_fence_is_not_front_matter() {
        let note = meta("---\ntags: [work]\nno closing fence\n", &SorterConfig::default());
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_unparsable_front_matter_is_ignored() {
        let note = meta("---\n: [ : bad\n---\nBody.\n", &SorterConfig::default());
        assert!(note.front_matter.is_empty());
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_front_matter_values_are_readable() {
        let note = meta(
            "---\nproject: acme\npriority: 3\n---\n",
            &SorterConfig::default(),
        );
        assert_eq!(
            note.front_matter_value("project"),
            Some(&Value::String("acme".to_string()))
        );
        assert!(note.front_matter_value("missing").is_none());
    }

    #[test]
    fn test_disable_flag() {
        let note = meta("---\ntagsort: disable\n---\n", &SorterConfig::default());
        assert!(note.is_disabled());

        let note = meta("---\ntagsort: enable\n---\n", &SorterConfig::default());
        assert!(!note.is_disabled());

        let note = meta("No frontmatter.\n", &SorterConfig::default());
        assert!(!note.is_disabled());
    }

    #[test]
    fn test_empty_front_matter_block() {
        let note = meta("---\n---\nBody.\n", &SorterConfig::default());
        assert!(note.front_matter.is_empty());
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_crlf_fences() {
        let note = meta(
            "---\r\ntags: [work]\r\n---\r\nBody.\r\n",
            &SorterConfig::default(),
        );
        assert_eq!(note.tags, vec!["work"]);
    }
}
