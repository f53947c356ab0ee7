// SPDX-License-Identifier: MIT

//! Vault scanning and dry-run planning
//!
//! Walks a vault directory, builds metadata for every markdown note, and
//! resolves each note against the rules. The result is a plan of moves; no
//! file is touched here — performing moves belongs to the host.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::config::SorterConfig;
use super::note::NoteMeta;
use super::rules::RuleSet;
use crate::error::TagsortError;

/// A planned destination for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    /// Note path, relative to the vault root
    pub note: PathBuf,
    /// Destination folder, relative to the vault root
    pub folder: String,
}

/// Read every markdown note under `vault` into metadata records.
///
/// Paths in the result are relative to the vault root, matching how rules
/// and exclusions are written.
pub fn scan_vault(vault: &Path, config: &SorterConfig) -> Result<Vec<NoteMeta>, TagsortError> {
    let mut notes = Vec::new();
    for entry in WalkDir::new(vault).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let text = fs::read_to_string(entry.path())?;
        let rel = entry
            .path()
            .strip_prefix(vault)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        notes.push(NoteMeta::from_text(rel, &text, config));
    }
    log::debug!("Scanned {} notes under {}", notes.len(), vault.display());
    Ok(notes)
}

/// Resolve every note against the rules and report the moves a host would
/// perform. Notes already sitting in their destination folder are skipped.
pub fn plan(vault: &Path, config: &SorterConfig) -> Result<Vec<PlannedMove>, TagsortError> {
    let rules = RuleSet::new(config);
    let mut moves = Vec::new();

    for note in scan_vault(vault, config)? {
        let Some(folder) = rules.resolve(&note) else {
            log::debug!("No rule matched {}", note.path.display());
            continue;
        };
        let current = note.path.parent().unwrap_or_else(|| Path::new(""));
        if current == Path::new(folder) {
            log::debug!("{} is already in {}", note.path.display(), folder);
            continue;
        }
        log::info!("Would move {} to {}", note.path.display(), folder);
        moves.push(PlannedMove {
            note: note.path,
            folder: folder.to_string(),
        });
    }

    Ok(moves)
}
