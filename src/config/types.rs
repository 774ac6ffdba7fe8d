use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::classify::TriggerSet;
use crate::constants::{DEFAULT_CONTEXT_LINES, HIDDEN_PREFIX};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub skills_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_file: Option<PathBuf>,
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
    #[serde(default = "default_true")]
    pub parallel: bool,
    #[serde(default = "default_hidden_prefix")]
    pub hidden_prefix: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            skills_dir: None,
            output_file: None,
            context_lines: default_context_lines(),
            parallel: true,
            hidden_prefix: default_hidden_prefix(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub preview: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { summary_json: None, preview: true }
    }
}

/// Extra trigger appended after the built-in list.
///
/// A `pattern` containing `{unit}` is matched with the skill name substituted;
/// any other pattern must co-occur with the name in either order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerEntry {
    pub label: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkillGraphToml {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub triggers: Vec<TriggerEntry>,
}

const fn default_true() -> bool { true }
const fn default_context_lines() -> usize { DEFAULT_CONTEXT_LINES }
fn default_hidden_prefix() -> String { HIDDEN_PREFIX.to_string() }

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub skills_dir: PathBuf,
    pub output_file: PathBuf,
    pub context_lines: usize,
    pub parallel: bool,
    pub hidden_prefix: String,
    pub summary_json: Option<PathBuf>,
    pub preview: bool,
    pub quiet: bool,
    pub triggers: TriggerSet,
}
