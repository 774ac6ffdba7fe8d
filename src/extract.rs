// src/extract.rs
//! Per-skill reference extraction.

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;
use tracing::{debug, warn};

use crate::classify::Classifier;
use crate::discovery::Unit;
use crate::error::Result;
use crate::search::{names_pattern, ContextSearch};
use crate::types::UnitReferences;

/// Finds and classifies references from one skill to the others.
///
/// Holds only read-only state, so one extractor serves all workers.
pub struct Extractor<'a, S: ContextSearch> {
    search: &'a S,
    classifier: &'a Classifier,
    known: &'a [String],
    pattern: Regex,
}

impl<'a, S: ContextSearch> Extractor<'a, S> {
    /// # Errors
    /// Returns error if the combined name pattern cannot be compiled.
    pub fn new(search: &'a S, classifier: &'a Classifier, known: &'a [String]) -> Result<Self> {
        Ok(Self {
            search,
            classifier,
            known,
            pattern: names_pattern(known)?,
        })
    }

    /// Extracts the reference sets of `unit`.
    ///
    /// A failed search is logged and yields empty sets; it never aborts the run.
    #[must_use]
    pub fn extract(&self, unit: &Unit) -> UnitReferences {
        match self.search.search(&unit.path, &self.pattern) {
            Ok(context) => self.classify_context(&unit.name, &context),
            Err(e) => {
                warn!(skill = %unit.name, error = %e, "search failed, skill contributes no references");
                UnitReferences::degraded(&unit.name, format!("Error searching {}: {e}", unit.path.display()))
            }
        }
    }

    /// Classifies every known name mentioned in `context`.
    #[must_use]
    pub fn classify_context(&self, unit: &str, context: &str) -> UnitReferences {
        let mut all = BTreeSet::new();
        let mut evidence = BTreeMap::new();

        for name in self.known.iter().filter(|n| n.as_str() != unit) {
            if !context.contains(name.as_str()) {
                continue;
            }
            all.insert(name.clone());
            if let Some(label) = self.classifier.prerequisite_evidence(name, context) {
                evidence.insert(name.clone(), label.to_string());
            }
        }

        debug!(
            skill = unit,
            references = all.len(),
            prerequisites = evidence.len(),
            "extracted references"
        );
        UnitReferences::new(unit, all, evidence)
    }
}
