// src/bin/linkrank.rs
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use linkrank::graph::pagerank::{self, PageRankConfig};
use linkrank::graph::{stats, LinkGraph};
use linkrank::loader;
use linkrank::report::{self, AnalysisReport};

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(about = "PageRank and degree statistics over a directory of page link files")]
struct Cli {
    /// Directory holding one edge-list file per page
    pages: PathBuf,

    /// Damping factor, strictly between 0 and 1
    #[arg(long, default_value_t = 0.85, value_parser = parse_damping)]
    damping: f64,

    /// Iteration budget for the solver
    #[arg(long, default_value_t = 100, value_parser = parse_max_iterations)]
    max_iterations: usize,

    /// L1 convergence tolerance, strictly positive
    #[arg(long, default_value_t = 1e-6, value_parser = parse_tolerance)]
    tolerance: f64,

    /// Emit the report as a JSON document on stdout
    #[arg(long)]
    json: bool,

    /// Suppress the per-iteration difference trace
    #[arg(long, short)]
    quiet: bool,
}

fn parse_damping(s: &str) -> std::result::Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v > 0.0 && v < 1.0 {
        Ok(v)
    } else {
        Err(format!("damping must be in (0, 1), got {v}"))
    }
}

fn parse_max_iterations(s: &str) -> std::result::Result<usize, String> {
    let v: usize = s.parse().map_err(|e| format!("{e}"))?;
    if v >= 1 {
        Ok(v)
    } else {
        Err("max-iterations must be at least 1".to_string())
    }
}

fn parse_tolerance(s: &str) -> std::result::Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(format!("tolerance must be positive, got {v}"))
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let pages = loader::load_directory(&cli.pages);
    let graph = LinkGraph::build(pages).context("building link graph")?;

    let (outgoing, incoming) =
        stats::compute(&graph).context("computing degree statistics")?;

    let config = PageRankConfig {
        damping: cli.damping,
        max_iterations: cli.max_iterations,
        tolerance: cli.tolerance,
    };
    let outcome = pagerank::run(&graph, config).context("running PageRank")?;

    let report = AnalysisReport {
        node_count: graph.node_count(),
        outgoing,
        incoming,
        pagerank: outcome,
    };

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        report::print_report(&report, !cli.quiet);
    }

    Ok(())
}
