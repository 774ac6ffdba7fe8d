// src/pipeline.rs
//! End-to-end analysis run: discover, extract, build, detect, render, write.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::classify::Classifier;
use crate::config::Config;
use crate::discovery::{discover_units, unit_names, Unit};
use crate::error::{Result, SkillGraphError};
use crate::extract::Extractor;
use crate::graph::{
    dependency_counts, render_mermaid, CycleReport, DependencyCount, DependencyGraphs,
};
use crate::reporting;
use crate::search::{ContextSearch, WalkSearch};
use crate::types::{Reference, UnitReferences};

/// Everything computed by one run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Skill names in discovery order.
    pub units: Vec<String>,
    /// Extraction results, same order as `units`.
    pub results: Vec<UnitReferences>,
    pub graphs: DependencyGraphs,
    /// Counts in discovery order.
    pub counts: Vec<DependencyCount>,
    pub cycles: CycleReport,
    /// Rendered Mermaid diagram.
    pub diagram: String,
}

impl Analysis {
    /// Skills whose extraction degraded, with the reason.
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.results
            .iter()
            .filter_map(|r| r.warning.as_deref().map(|w| (r.unit.as_str(), w)))
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals {
            skills: self.units.len(),
            references: self.graphs.all.edge_count(),
            prerequisites: self.graphs.prerequisites.edge_count(),
            invocations: self.graphs.invocations.edge_count(),
            bidirectional: self.cycles.all.len(),
            prerequisite_cycles: self.cycles.prerequisites.len(),
            invocation_cycles: self.cycles.invocations.len(),
        }
    }

    /// Serializable view used for the JSON summary.
    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            skills: &self.units,
            counts: &self.counts,
            totals: self.totals(),
            references: self.results.iter().flat_map(UnitReferences::references).collect(),
            cycles: &self.cycles,
            warnings: self
                .warnings()
                .map(|(unit, message)| UnitWarning { unit, message })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub skills: usize,
    pub references: usize,
    pub prerequisites: usize,
    pub invocations: usize,
    pub bidirectional: usize,
    pub prerequisite_cycles: usize,
    pub invocation_cycles: usize,
}

#[derive(Debug, Serialize)]
pub struct UnitWarning<'a> {
    pub unit: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub skills: &'a [String],
    pub counts: &'a [DependencyCount],
    pub totals: Totals,
    pub references: Vec<Reference>,
    pub cycles: &'a CycleReport,
    pub warnings: Vec<UnitWarning<'a>>,
}

/// Hooks called as a run moves through its phases.
///
/// `analyzing` may be called from worker threads.
pub trait Progress: Sync {
    fn discovered(&self, _units: &[String]) {}
    fn analyzing(&self, _unit: &str) {}
    fn counting(&self) {}
}

/// Progress sink that ignores every event.
pub struct Silent;

impl Progress for Silent {}

/// Runs the analysis with the in-process searcher. No console output, no files.
///
/// # Errors
/// Returns error if discovery fails or a trigger pattern is invalid.
pub fn analyze(config: &Config) -> Result<Analysis> {
    analyze_with(config, &WalkSearch::new(config.context_lines), &Silent)
}

/// Runs the analysis with a caller-provided searcher and progress sink.
///
/// The discovered list is reported before any extraction starts. With
/// `parallel` enabled, `analyzing` events arrive in no particular order.
///
/// # Errors
/// Returns error if discovery fails or a trigger pattern is invalid.
pub fn analyze_with<S, P>(config: &Config, search: &S, progress: &P) -> Result<Analysis>
where
    S: ContextSearch,
    P: Progress,
{
    let found = discover_units(&config.skills_dir, &config.hidden_prefix)?;
    let units = unit_names(&found);
    info!(skills = units.len(), dir = %config.skills_dir.display(), "starting analysis");
    progress.discovered(&units);

    let results = extract_all(config, search, &found, &units, progress)?;

    progress.counting();
    let graphs = DependencyGraphs::build(&units, &results);
    let counts = dependency_counts(&graphs.all, &units);
    let cycles = CycleReport::detect(&graphs);
    let diagram = render_mermaid(&graphs.all, &counts, &cycles.invocations);

    Ok(Analysis {
        units,
        results,
        graphs,
        counts,
        cycles,
        diagram,
    })
}

fn extract_all<S, P>(
    config: &Config,
    search: &S,
    found: &[Unit],
    names: &[String],
    progress: &P,
) -> Result<Vec<UnitReferences>>
where
    S: ContextSearch,
    P: Progress,
{
    let classifier = Classifier::new(&config.triggers, names)?;
    let extractor = Extractor::new(search, &classifier, names)?;
    let work = |unit: &Unit| {
        progress.analyzing(&unit.name);
        extractor.extract(unit)
    };

    let results: Vec<UnitReferences> = if config.parallel {
        found.par_iter().map(work).collect()
    } else {
        found.iter().map(work).collect()
    };
    Ok(results)
}

/// Full run: analysis with console report, diagram written to `output_file`,
/// optional JSON summary.
///
/// Problematic cycles are reported, not treated as failure.
///
/// # Errors
/// Returns error on discovery, configuration or output failures. Nothing is
/// written when discovery fails.
pub fn run(config: &Config) -> Result<Analysis> {
    let quiet = config.quiet;
    let search = WalkSearch::new(config.context_lines);

    let analysis = if quiet {
        analyze_with(config, &search, &Silent)?
    } else {
        reporting::print_banner();
        analyze_with(config, &search, &reporting::ConsoleProgress)?
    };

    for (unit, message) in analysis.warnings() {
        warn!(skill = unit, "{message}");
    }

    if !quiet {
        reporting::print_findings(&analysis);
    }

    write_output(&config.output_file, &analysis.diagram)?;
    if let Some(path) = &config.summary_json {
        write_summary(path, &analysis)?;
    }
    info!(path = %config.output_file.display(), "diagram written");

    if !quiet {
        reporting::print_statistics(&analysis, &config.output_file, config.preview);
    }
    Ok(analysis)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    let to_err = |source| SkillGraphError::Output {
        source,
        path: path.to_path_buf(),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_err)?;
    }
    fs::write(path, content).map_err(to_err)
}

fn write_summary(path: &Path, analysis: &Analysis) -> Result<()> {
    let json = serde_json::to_string_pretty(&analysis.summary()).map_err(|e| SkillGraphError::Output {
        source: e.into(),
        path: path.to_path_buf(),
    })?;
    write_output(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl Recorder {
        fn push(&self, event: String) {
            if let Ok(mut events) = self.0.lock() {
                events.push(event);
            }
        }

        fn events(&self) -> Vec<String> {
            self.0.lock().map(|e| e.clone()).unwrap_or_default()
        }
    }

    impl Progress for Recorder {
        fn discovered(&self, units: &[String]) {
            self.push(format!("found {}", units.join(",")));
        }
        fn analyzing(&self, unit: &str) {
            self.push(format!("analyzing {unit}"));
        }
        fn counting(&self) {
            self.push("counting".to_string());
        }
    }

    #[test]
    fn test_skill_list_is_reported_before_extraction() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        for name in ["beta", "alpha"] {
            fs::create_dir_all(dir.path().join(name))?;
            fs::write(dir.path().join(name).join("SKILL.md"), "nothing\n")?;
        }
        let mut config = Config::for_skills_dir(dir.path());
        config.parallel = false;

        let recorder = Recorder::default();
        analyze_with(&config, &WalkSearch::new(5), &recorder)?;
        assert_eq!(
            recorder.events(),
            vec!["found alpha,beta", "analyzing alpha", "analyzing beta", "counting"]
        );
        Ok(())
    }

    #[test]
    fn test_failed_discovery_reports_nothing() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let config = Config::for_skills_dir(dir.path().join("missing"));
        let recorder = Recorder::default();
        assert!(analyze_with(&config, &WalkSearch::new(5), &recorder).is_err());
        assert!(recorder.events().is_empty());
        Ok(())
    }
}
