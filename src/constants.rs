// src/constants.rs
//! Defaults shared by configuration and the analysis pipeline.

/// Directory holding one subdirectory per skill, relative to the working directory.
pub const DEFAULT_SKILLS_DIR: &str = ".claude/skills";

/// Diagram file name, written inside the skills directory unless overridden.
pub const DEFAULT_OUTPUT_NAME: &str = "skill-dependencies.mermaid";

/// Lines of context captured before and after every name match.
pub const DEFAULT_CONTEXT_LINES: usize = 5;

/// Entries starting with this marker are never treated as skills.
pub const HIDDEN_PREFIX: &str = ".";

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "skillgraph.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "SKILLGRAPH_CONFIG";

/// Separator placed between non-adjacent context blocks, as grep does.
pub const BLOCK_SEPARATOR: &str = "--";
