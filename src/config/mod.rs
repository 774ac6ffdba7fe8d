// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{AnalysisConfig, Config, ReportConfig, SkillGraphToml, TriggerEntry};

use std::path::{Path, PathBuf};

use crate::classify::TriggerSet;
use crate::constants::{DEFAULT_OUTPUT_NAME, DEFAULT_SKILLS_DIR};
use crate::error::Result;

impl Config {
    /// Defaults rooted at `skills_dir`, with the diagram written inside it.
    #[must_use]
    pub fn for_skills_dir(skills_dir: impl Into<PathBuf>) -> Self {
        let skills_dir = skills_dir.into();
        Self::from_toml(SkillGraphToml::default(), Some(skills_dir))
    }

    /// Loads `skillgraph.toml` (or `$SKILLGRAPH_CONFIG`) from the working directory.
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let raw = io::load_toml(&io::config_path())?;
        Ok(Self::from_toml(raw, None))
    }

    /// Parses a config document without touching the filesystem.
    ///
    /// # Errors
    /// Returns error if `content` is not valid TOML for [`SkillGraphToml`].
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let raw = io::parse_toml(content, origin)?;
        Ok(Self::from_toml(raw, None))
    }

    fn from_toml(raw: SkillGraphToml, skills_dir: Option<PathBuf>) -> Self {
        let skills_dir = skills_dir
            .or(raw.analysis.skills_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SKILLS_DIR));
        let output_file = raw
            .analysis
            .output_file
            .unwrap_or_else(|| skills_dir.join(DEFAULT_OUTPUT_NAME));

        let mut triggers = TriggerSet::builtin();
        for entry in raw.triggers {
            triggers.push(entry.label, entry.pattern);
        }

        Self {
            skills_dir,
            output_file,
            context_lines: raw.analysis.context_lines,
            parallel: raw.analysis.parallel,
            hidden_prefix: raw.analysis.hidden_prefix,
            summary_json: raw.report.summary_json,
            preview: raw.report.preview,
            quiet: false,
            triggers,
        }
    }
}
