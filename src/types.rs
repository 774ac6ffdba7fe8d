// src/types.rs
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// How a reference from one skill to another is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Sequencing or informational note ("requires X", "see also X").
    Prerequisite,
    /// Anything else: the skill actively calls into the target.
    Invocation,
}

impl Classification {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Prerequisite => "prerequisite",
            Self::Invocation => "invocation",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified mention of `target` inside `source`'s content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Reference {
    pub source: String,
    pub target: String,
    pub classification: Classification,
    /// Label of the trigger that made this a prerequisite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// Extraction result for one skill.
///
/// `invocations` is always `all - prerequisites`; the constructor enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnitReferences {
    pub unit: String,
    pub all: BTreeSet<String>,
    pub prerequisites: BTreeSet<String>,
    pub invocations: BTreeSet<String>,
    /// Trigger label per prerequisite target.
    pub evidence: BTreeMap<String, String>,
    /// Set when the search failed and the sets were left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl UnitReferences {
    /// Builds the three sets from the referenced names and prerequisite evidence.
    #[must_use]
    pub fn new(unit: impl Into<String>, all: BTreeSet<String>, evidence: BTreeMap<String, String>) -> Self {
        let evidence: BTreeMap<String, String> =
            evidence.into_iter().filter(|(name, _)| all.contains(name)).collect();
        let prerequisites: BTreeSet<String> = evidence.keys().cloned().collect();
        let invocations = all.difference(&prerequisites).cloned().collect();
        Self {
            unit: unit.into(),
            all,
            prerequisites,
            invocations,
            evidence,
            warning: None,
        }
    }

    /// Empty result for a skill whose search failed.
    #[must_use]
    pub fn degraded(unit: impl Into<String>, warning: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            warning: Some(warning.into()),
            ..Self::default()
        }
    }

    /// Every reference as a classified record, ordered by target.
    #[must_use]
    pub fn references(&self) -> Vec<Reference> {
        self.all
            .iter()
            .map(|target| {
                let evidence = self.evidence.get(target).cloned();
                let classification = if evidence.is_some() {
                    Classification::Prerequisite
                } else {
                    Classification::Invocation
                };
                Reference {
                    source: self.unit.clone(),
                    target: target.clone(),
                    classification,
                    evidence,
                }
            })
            .collect()
    }
}
