// src/search.rs
//! Recursive, case-insensitive context search over one skill directory.
//!
//! Mirrors `grep -r -i -E -B N -A N`: every matching line is captured together
//! with `N` lines on each side, overlapping windows in a file merge into one
//! block, and blocks are separated by `--`.

use std::fs;
use std::ops::Range;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::debug;
use walkdir::WalkDir;

use crate::constants::BLOCK_SEPARATOR;
use crate::error::{Result, SkillGraphError};

/// Text search capability used by the extractor.
pub trait ContextSearch: Sync {
    /// Returns the merged context text for every match of `pattern` under `dir`.
    ///
    /// # Errors
    /// Returns error if the tree cannot be walked or a file cannot be read.
    fn search(&self, dir: &Path, pattern: &Regex) -> Result<String>;
}

/// In-process implementation walking the tree with `walkdir`.
#[derive(Debug, Clone, Copy)]
pub struct WalkSearch {
    context_lines: usize,
}

impl WalkSearch {
    #[must_use]
    pub fn new(context_lines: usize) -> Self {
        Self { context_lines }
    }
}

impl ContextSearch for WalkSearch {
    fn search(&self, dir: &Path, pattern: &Regex) -> Result<String> {
        let mut blocks = Vec::new();
        for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| SkillGraphError::from_walk(dir, e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let bytes = fs::read(entry.path()).map_err(|source| SkillGraphError::Search {
                source,
                path: entry.path().to_path_buf(),
            })?;
            let Ok(text) = String::from_utf8(bytes) else {
                debug!(path = %entry.path().display(), "skipping non-text file");
                continue;
            };
            blocks.extend(context_blocks(&text, pattern, self.context_lines));
        }
        Ok(blocks.join(&format!("\n{BLOCK_SEPARATOR}\n")))
    }
}

/// Builds one case-insensitive alternation matching any of `names` literally.
///
/// # Errors
/// Returns error if the combined pattern exceeds the regex size limit.
pub fn names_pattern(names: &[String]) -> Result<Regex> {
    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    let re = RegexBuilder::new(&format!("(?:{alternation})"))
        .case_insensitive(true)
        .build()?;
    Ok(re)
}

/// Context blocks of one file: matched lines plus `context` lines around them.
#[must_use]
pub fn context_blocks(text: &str, pattern: &Regex, context: usize) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    merge_windows(
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| pattern.is_match(line))
            .map(|(i, _)| i.saturating_sub(context)..(i + context + 1).min(lines.len())),
    )
    .into_iter()
    .filter_map(|range| lines.get(range).map(|slice| slice.join("\n")))
    .collect()
}

/// Merges ascending windows that overlap or touch.
fn merge_windows(windows: impl Iterator<Item = Range<usize>>) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::new();
    for w in windows {
        match merged.last_mut() {
            Some(last) if w.start <= last.end => last.end = last.end.max(w.end),
            _ => merged.push(w),
        }
    }
    merged
}
