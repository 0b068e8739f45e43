// src/graph/stats.rs
//! Degree distributions over a [`LinkGraph`] and their summaries.

use serde::Serialize;

use crate::error::{LinkRankError, Result};
use crate::graph::store::LinkGraph;

/// Summary statistics for one degree distribution.
#[derive(Debug, Clone, Serialize)]
pub struct DegreeSummary {
    pub mean: f64,
    pub median: f64,
    pub min: usize,
    pub max: usize,
    /// 20th/40th/60th/80th percentile cutpoints, linearly interpolated
    /// between order statistics.
    pub quintiles: [f64; 4],
}

/// Computes the (outgoing, incoming) degree summaries.
///
/// The outgoing count of a node is its edge-list length, duplicates
/// counted. The incoming count is the number of distinct known nodes that
/// link to it. Pure function of the graph's content.
///
/// # Errors
/// Returns `EmptyGraph` for a zero-node graph; every statistic is
/// undefined there.
pub fn compute(graph: &LinkGraph) -> Result<(DegreeSummary, DegreeSummary)> {
    if graph.node_count() == 0 {
        return Err(LinkRankError::EmptyGraph);
    }

    let mut outgoing = Vec::with_capacity(graph.node_count());
    let mut incoming = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        outgoing.push(graph.outgoing_links(node)?.len());
        incoming.push(graph.incoming_nodes(node)?.len());
    }

    Ok((summarize(outgoing), summarize(incoming)))
}

#[allow(clippy::cast_precision_loss)]
fn summarize(mut counts: Vec<usize>) -> DegreeSummary {
    counts.sort_unstable();
    let total: usize = counts.iter().sum();
    let mean = total as f64 / counts.len() as f64;

    DegreeSummary {
        mean,
        median: percentile(&counts, 50.0),
        min: counts[0],
        max: counts[counts.len() - 1],
        quintiles: [20.0, 40.0, 60.0, 80.0].map(|p| percentile(&counts, p)),
    }
}

/// Percentile of a sorted distribution at rank `p/100 * (n - 1)`, linearly
/// interpolated between the two surrounding order statistics.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percentile(sorted: &[usize], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] as f64 + frac * (sorted[hi] as f64 - sorted[lo] as f64)
}
