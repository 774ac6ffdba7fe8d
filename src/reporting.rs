//! Console output for an analysis run.
//!
//! Progress, ranking and statistics go to stdout. Problematic (invocation)
//! pairs are shown in red; prerequisite pairs are listed as expected
//! workflow sequences.

use std::path::Path;

use colored::Colorize;

use crate::graph::rank;
use crate::pipeline::{Analysis, Progress};

const RULE_WIDTH: usize = 60;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn print_banner() {
    println!("{}", heavy_rule());
    println!("{}", "Skill Dependency Analysis".bold());
    println!("{}", heavy_rule());
    println!();
}

/// Prints run progress as it happens.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn discovered(&self, units: &[String]) {
        println!("Found {} skills:", units.len());
        println!("  {}", units.join(", "));
        println!();
        println!("Building dependency graph...");
    }

    fn analyzing(&self, unit: &str) {
        println!("{}", format!("Analyzing {unit}...").dimmed());
    }

    fn counting(&self) {
        println!();
        println!("Counting dependencies...");
    }
}

/// Warnings, ranking and cycle findings.
pub fn print_findings(analysis: &Analysis) {
    for (unit, message) in analysis.warnings() {
        println!("{} {unit}: {message}", "Warning:".yellow().bold());
    }

    println!();
    print_ranking(analysis);
    print_cycles(analysis);
}

fn print_ranking(analysis: &Analysis) {
    println!("Skills sorted by dependency count:");
    for c in rank(&analysis.counts) {
        let noun = if c.count == 1 { "dependency" } else { "dependencies" };
        println!("  {}: {} {noun}", c.unit.cyan(), c.count);
    }
    println!();
}

fn print_cycles(analysis: &Analysis) {
    let cycles = &analysis.cycles;
    println!("Detecting circular dependencies...");
    println!("  Total bidirectional relationships: {}", cycles.all.len());
    println!(
        "  Prerequisite cycles (expected/harmless): {}",
        cycles.prerequisites.len()
    );

    if cycles.has_problems() {
        println!();
        println!(
            "{}",
            format!(
                "⚠️  Found {} problematic circular invocations:",
                cycles.invocations.len()
            )
            .red()
            .bold()
        );
        for pair in &cycles.invocations {
            println!("     {}", pair.to_string().red());
        }
    } else {
        println!();
        println!("{}", "✓ No problematic circular invocations found.".green());
    }

    println!();
    println!("Prerequisite cycles (harmless workflow sequences):");
    for pair in &cycles.prerequisites {
        println!("  {} {pair}", "✓".green());
    }
    println!();
    println!("Generating Mermaid diagram...");
}

/// Closing statistics, optionally followed by the diagram itself.
pub fn print_statistics(analysis: &Analysis, output: &Path, preview: bool) {
    let t = analysis.totals();
    println!();
    println!("{}", heavy_rule());
    println!("{}", "Analysis complete!".green().bold());
    println!("{}", heavy_rule());
    println!("Output file: {}", output.display());
    println!();
    println!("Statistics:");
    println!("  Total skills: {}", t.skills);
    println!("  Total references: {}", t.references);
    println!("    Prerequisites: {}", t.prerequisites);
    println!("    Invocations: {}", t.invocations);
    println!("  Bidirectional relationships: {}", t.bidirectional);
    println!("    Prerequisite cycles (harmless): {}", t.prerequisite_cycles);
    let problematic = format!("    Invocation cycles (problematic): {}", t.invocation_cycles);
    if t.invocation_cycles > 0 {
        println!("{}", problematic.red());
    } else {
        println!("{problematic}");
    }

    if preview {
        println!();
        println!("Preview:");
        println!("{}", light_rule());
        println!("{}", analysis.diagram);
        println!("{}", light_rule());
    }
}
