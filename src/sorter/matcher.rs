// SPDX-License-Identifier: MIT

//! Literal resolution against note metadata
//!
//! This is the predicate the expression engine delegates its leaves to.
//! The literal grammar:
//! - `tag[value]` — the note carries tag `value`
//! - `key[value]` — frontmatter entry `key` equals `value` (any element
//!   counts for list-valued entries)
//! - bare `value` — shorthand for `tag[value]`
//!
//! The empty literal — produced only by degenerate trees from malformed
//! expressions — matches nothing, so malformed rules fail closed.

use regex::Regex;
use serde_yaml::Value;

use super::config::SorterConfig;
use super::note::NoteMeta;

/// Resolve one literal against a note.
pub fn literal_matches(literal: &str, note: &NoteMeta, config: &SorterConfig) -> bool {
    if literal.is_empty() {
        return false;
    }

    match split_qualifier(literal) {
        Some(("tag", value)) => tag_matches(value, note, config),
        Some((key, value)) => front_matter_matches(key, value, note),
        None => tag_matches(literal, note, config),
    }
}

/// Split `key[value]` into its parts; anything else is a bare literal.
fn split_qualifier(literal: &str) -> Option<(&str, &str)> {
    let inner = literal.strip_suffix(']')?;
    let (key, value) = inner.split_once('[')?;
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

fn tag_matches(value: &str, note: &NoteMeta, config: &SorterConfig) -> bool {
    if config.regex_tag_checker {
        let pattern = value.trim_start_matches('#');
        match Regex::new(pattern) {
            Ok(re) => note.tags.iter().any(|tag| re.is_match(tag)),
            Err(e) => {
                log::warn!("Skipping invalid tag pattern '{}': {}", value, e);
                false
            }
        }
    } else {
        note.has_tag(value)
    }
}

fn front_matter_matches(key: &str, value: &str, note: &NoteMeta) -> bool {
    match note.front_matter_value(key) {
        Some(entry) => scalar_matches(entry, value),
        None => false,
    }
}

fn scalar_matches(entry: &Value, value: &str) -> bool {
    match entry {
        Value::String(s) => s == value,
        Value::Number(n) => n.to_string() == value,
        Value::Bool(b) => b.to_string() == value,
        Value::Sequence(items) => items.iter().any(|item| scalar_matches(item, value)),
        _ => false,
    }
}
