// src/classify.rs
//! Prerequisite detection over a skill's context text.
//!
//! A reference is a *prerequisite* when one of the trigger phrases co-occurs
//! with the skill name somewhere in the captured context, in either order.
//! Triggers are evaluated in list order and the first hit wins; anything not
//! classified as a prerequisite is an invocation.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Placeholder replaced by the escaped skill name in template triggers.
pub const UNIT_PLACEHOLDER: &str = "{unit}";

/// Built-in sequencing and requirement vocabulary, in evaluation order.
const BUILTIN_TRIGGERS: &[(&str, &str)] = &[
    ("prerequisite", r"prerequisite.*?(?:`|skill[:\s])"),
    ("have completed", r"(?:have|has)\s+completed.*?(?:`|skill)"),
    ("after skill", r"after.*?(?:`|skill)"),
    ("before using", r"before.*?using"),
    ("must complete", r"must.*?(?:complete|have).*?(?:`|skill)"),
    // no reference marker: a bare "requires X" counts
    ("requires", r"requires?"),
    ("depends on", r"depends?\s+on.*?(?:`|skill)"),
    ("flow through", r"flow.*?through.*?(?:`|skill)"),
    ("mandatory before", r"mandatory.*?before"),
    ("see also", r"see also.*?(?:`|skill)"),
    ("related skills", r"related skills?.*?(?:`|skill)"),
    ("see skill", r"\bsee\s+`{unit}`\s+skill"),
];

/// One entry of the trigger list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub label: String,
    pub pattern: String,
}

impl Trigger {
    /// Template triggers embed the skill name themselves.
    #[must_use]
    pub fn is_template(&self) -> bool {
        self.pattern.contains(UNIT_PLACEHOLDER)
    }

    /// Regex source that matches when this trigger applies to `name`.
    fn source_for(&self, name: &str) -> String {
        let escaped = regex::escape(name);
        if self.is_template() {
            self.pattern.replace(UNIT_PLACEHOLDER, &escaped)
        } else {
            let p = &self.pattern;
            format!("(?:{p}).*?{escaped}|{escaped}.*?(?:{p})")
        }
    }
}

/// Ordered, extensible trigger list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSet {
    triggers: Vec<Trigger>,
}

impl TriggerSet {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            triggers: BUILTIN_TRIGGERS
                .iter()
                .map(|(label, pattern)| Trigger {
                    label: (*label).to_string(),
                    pattern: (*pattern).to_string(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { triggers: Vec::new() }
    }

    /// Appends a trigger after the existing ones.
    pub fn push(&mut self, label: impl Into<String>, pattern: impl Into<String>) {
        self.triggers.push(Trigger {
            label: label.into(),
            pattern: pattern.into(),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }
}

impl Default for TriggerSet {
    fn default() -> Self {
        Self::builtin()
    }
}

struct CompiledTrigger {
    label: String,
    re: Regex,
}

/// Trigger list compiled once per known skill name.
///
/// Shared read-only across extraction workers.
pub struct Classifier {
    rules: HashMap<String, Vec<CompiledTrigger>>,
}

impl Classifier {
    /// Compiles every trigger against every name.
    ///
    /// # Errors
    /// Returns error if a trigger pattern is not a valid regex.
    pub fn new(triggers: &TriggerSet, names: &[String]) -> Result<Self> {
        let mut rules = HashMap::with_capacity(names.len());
        for name in names {
            let compiled = triggers
                .iter()
                .map(|t| compile(t, name))
                .collect::<Result<Vec<_>>>()?;
            rules.insert(name.clone(), compiled);
        }
        Ok(Self { rules })
    }

    /// Label of the first trigger tying `name` to a prerequisite context.
    #[must_use]
    pub fn prerequisite_evidence(&self, name: &str, context: &str) -> Option<&str> {
        self.rules
            .get(name)?
            .iter()
            .find(|t| t.re.is_match(context))
            .map(|t| t.label.as_str())
    }
}

fn compile(trigger: &Trigger, name: &str) -> Result<CompiledTrigger> {
    let re = RegexBuilder::new(&trigger.source_for(name))
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()?;
    Ok(CompiledTrigger {
        label: trigger.label.clone(),
        re,
    })
}
