// src/report.rs
//! Console and JSON rendering of an analysis run.

use colored::Colorize;
use serde::Serialize;

use crate::graph::pagerank::PageRankOutcome;
use crate::graph::stats::DegreeSummary;

/// Everything one analysis run produces, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub node_count: usize,
    pub outgoing: DegreeSummary,
    pub incoming: DegreeSummary,
    pub pagerank: PageRankOutcome,
}

impl AnalysisReport {
    /// Renders the report as a pretty-printed JSON document.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Prints the full report to stdout. `show_trace` adds the per-iteration
/// total-variation trace ahead of the ranking.
pub fn print_report(report: &AnalysisReport, show_trace: bool) {
    println!(
        "{} {} {}",
        "link graph:".bold(),
        report.node_count,
        if report.node_count == 1 { "node" } else { "nodes" }
    );
    println!();

    print_summary("Outgoing links", &report.outgoing);
    print_summary("Incoming links", &report.incoming);

    if show_trace {
        print_trace(&report.pagerank);
    }
    print_ranking(&report.pagerank);
}

fn print_summary(title: &str, summary: &DegreeSummary) {
    println!("{}", title.cyan().bold());
    println!(
        "  mean {:.3}   median {:.3}   min {}   max {}",
        summary.mean, summary.median, summary.min, summary.max
    );
    let q = summary.quintiles;
    println!(
        "  quintiles (20/40/60/80): {:.3} / {:.3} / {:.3} / {:.3}",
        q[0], q[1], q[2], q[3]
    );
    println!();
}

fn print_trace(outcome: &PageRankOutcome) {
    for (i, diff) in outcome.diff_history.iter().enumerate() {
        println!(
            "  {} iteration {i}, total difference {diff:.3e}",
            "trace:".dimmed()
        );
    }
    println!();
}

fn print_ranking(outcome: &PageRankOutcome) {
    println!("{}", "Top pages by PageRank".cyan().bold());
    for (i, (node, score)) in outcome.top.iter().enumerate() {
        println!("  {}. {}  {score:.6}", i + 1, node.green());
    }

    let status = if outcome.converged {
        format!("converged at iteration {}", outcome.iterations).green()
    } else {
        format!(
            "did not converge within {} iterations",
            outcome.iterations
        )
        .yellow()
    };
    println!("  {status}");
}
