// src/graph/pagerank.rs
//! `PageRank` power iteration over a [`LinkGraph`].

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{LinkRankError, Result};
use crate::graph::store::LinkGraph;

/// Number of top-ranked nodes returned in the outcome.
const TOP_K: usize = 5;

/// Solver parameters.
///
/// Caller contract: `damping` in (0, 1), `max_iterations >= 1`,
/// `tolerance > 0`.
#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// Probability of following a link versus jumping to a uniformly
    /// random node.
    pub damping: f64,
    /// Iteration budget. Exhausting it is a normal termination mode, not
    /// an error.
    pub max_iterations: usize,
    /// Convergence threshold on the L1 total variation between
    /// consecutive rank vectors.
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Result of one solver run.
#[derive(Debug, Clone, Serialize)]
pub struct PageRankOutcome {
    /// Up to five (node, score) pairs: descending score, ties broken by
    /// ascending node id.
    pub top: Vec<(String, f64)>,
    pub converged: bool,
    /// When converged, the index of the first iteration whose total
    /// variation dropped below tolerance; otherwise `max_iterations`.
    pub iterations: usize,
    /// Total variation recorded at every executed iteration.
    pub diff_history: Vec<f64>,
}

/// Runs the synchronous power iteration to convergence or budget.
///
/// Every iteration computes a complete new rank vector from the frozen
/// previous one, then swaps. Rank mass flowing out of a node is split
/// evenly over its outgoing list; a node with no outgoing links passes
/// nothing on, so its mass leaks from the system. That leak is a known
/// modeling simplification of the source algorithm and is preserved here
/// rather than corrected.
///
/// # Errors
/// Returns `EmptyGraph` for a zero-node graph.
#[allow(clippy::cast_precision_loss)]
pub fn run(graph: &LinkGraph, config: PageRankConfig) -> Result<PageRankOutcome> {
    let n = graph.node_count();
    if n == 0 {
        return Err(LinkRankError::EmptyGraph);
    }

    let nodes: Vec<&str> = graph.nodes().collect();
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (*node, i))
        .collect();

    // Fixed per-node data for the whole run: out-degrees (duplicates
    // counted) and deduplicated incoming sources as dense indices.
    let mut out_degree = Vec::with_capacity(n);
    let mut incoming: Vec<Vec<usize>> = Vec::with_capacity(n);
    for node in &nodes {
        out_degree.push(graph.outgoing_links(node)?.len());
        incoming.push(
            graph
                .incoming_nodes(node)?
                .iter()
                .map(|source| index[source.as_str()])
                .collect(),
        );
    }

    let base = (1.0 - config.damping) / n as f64;
    let mut rank = vec![1.0 / n as f64; n];
    let mut converged = false;
    let mut iterations = config.max_iterations;
    let mut diff_history = Vec::new();

    for i in 0..config.max_iterations {
        // Synchronous step: every worker reads only the frozen `rank`
        // snapshot; the assignment below is the single visibility point.
        let new_rank: Vec<f64> = incoming
            .par_iter()
            .map(|sources| {
                let flow: f64 = sources
                    .iter()
                    // A source is in an incoming list only if its outgoing
                    // list is non-empty, so the division is always defined.
                    .map(|&p| rank[p] / out_degree[p] as f64)
                    .sum();
                base + config.damping * flow
            })
            .collect();

        let diff: f64 = new_rank
            .iter()
            .zip(&rank)
            .map(|(new, old)| (new - old).abs())
            .sum();
        rank = new_rank;
        diff_history.push(diff);

        if diff < config.tolerance {
            converged = true;
            iterations = i;
            break;
        }
    }

    Ok(PageRankOutcome {
        top: top_ranked(&nodes, &rank),
        converged,
        iterations,
        diff_history,
    })
}

fn top_ranked(nodes: &[&str], rank: &[f64]) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = nodes
        .iter()
        .zip(rank)
        .map(|(node, score)| ((*node).to_string(), *score))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_K);
    ranked
}
