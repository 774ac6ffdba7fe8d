// src/config/io.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::SkillGraphToml;
use crate::constants::{CONFIG_ENV, CONFIG_FILE};
use crate::error::{Result, SkillGraphError};

/// Path of the config file: `$SKILLGRAPH_CONFIG` when set, else `skillgraph.toml`.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from)
}

/// Reads and parses the config at `path`. A missing file yields the defaults.
///
/// # Errors
/// Returns error on unreadable or malformed files.
pub fn load_toml(path: &Path) -> Result<SkillGraphToml> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), "loaded config");
            parse_toml(&content, path)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(SkillGraphToml::default())
        }
        Err(e) => Err(SkillGraphError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// # Errors
/// Returns error if `content` does not deserialize.
pub fn parse_toml(content: &str, origin: &Path) -> Result<SkillGraphToml> {
    toml::from_str(content).map_err(|e| SkillGraphError::Config {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}
