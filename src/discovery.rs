// src/discovery.rs
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SkillGraphError};

/// A skill directory found under the skills root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the skills under `root`, sorted by name.
///
/// Only directories count; entries whose name starts with `hidden_prefix` are
/// skipped.
///
/// # Errors
/// Returns [`SkillGraphError::Discovery`] if `root` is missing or unreadable.
pub fn discover_units(root: &Path, hidden_prefix: &str) -> Result<Vec<Unit>> {
    let to_err = |source| SkillGraphError::Discovery {
        source,
        path: root.to_path_buf(),
    };

    let mut units = Vec::new();
    for entry in fs::read_dir(root).map_err(to_err)? {
        let entry = entry.map_err(to_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !hidden_prefix.is_empty() && name.starts_with(hidden_prefix) {
            continue;
        }
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        units.push(Unit { name, path });
    }

    units.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(root = %root.display(), count = units.len(), "discovered skills");
    Ok(units)
}

/// Names of `units` in discovery order.
#[must_use]
pub fn unit_names(units: &[Unit]) -> Vec<String> {
    units.iter().map(|u| u.name.clone()).collect()
}
