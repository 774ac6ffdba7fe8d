// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillGraphError {
    #[error("cannot read skills directory {path}: {source}")]
    Discovery {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("search failed under {path}: {source}")]
    Search {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("cannot write {path}: {source}")]
    Output {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SkillGraphError>;

impl SkillGraphError {
    /// Wraps a walk failure under `root` as a search error.
    #[must_use]
    pub fn from_walk(root: &std::path::Path, e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| root.to_path_buf(), std::path::Path::to_path_buf);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        Self::Search { source, path }
    }
}
