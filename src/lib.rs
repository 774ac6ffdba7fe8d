//! # skillgraph
//!
//! Static cross-reference analysis for skill documentation.
//!
//! Each subdirectory of the skills root is a skill. Mentions of one skill's
//! name inside another's files become edges, classified as *prerequisites*
//! (sequencing notes such as "requires X" or "see also X") or *invocations*
//! (everything else). Mutual references are reported per classification and
//! the full graph is written as a Mermaid diagram with problematic
//! invocation pairs highlighted.
//!
//! ```rust,no_run
//! use skillgraph_core::config::Config;
//! use skillgraph_core::pipeline;
//!
//! let config = Config::for_skills_dir(".claude/skills");
//! let analysis = pipeline::analyze(&config).unwrap();
//! println!("{}", analysis.diagram);
//! ```

pub mod classify;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod graph;
pub mod pipeline;
pub mod reporting;
pub mod search;
pub mod types;

pub use error::{Result, SkillGraphError};
