// src/bin/skillgraph.rs
use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use skillgraph_core::config::Config;
use skillgraph_core::pipeline;

/// Analyzes every skill under the configured directory and writes the
/// dependency diagram. Settings come from `skillgraph.toml`.
#[derive(Parser)]
#[command(name = "skillgraph", version, about = "Skill dependency analyzer")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    pipeline::run(&config)
        .with_context(|| format!("Analysis of {} failed", config.skills_dir.display()))?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SKILLGRAPH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("skillgraph_core=warn,skillgraph=warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match env::var("SKILLGRAPH_LOG_FORMAT").as_deref() {
        Ok("json") => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
    }
}
