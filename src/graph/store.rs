// src/graph/store.rs
//! The immutable directed link graph and its query interface.

use std::collections::{HashMap, HashSet};

use crate::error::{LinkRankError, Result};

/// One node identifier: an opaque string key (originally a page file name).
pub type NodeId = String;

/// A directed graph of pages and the links between them.
///
/// Outgoing lists are stored exactly as supplied: duplicate entries are
/// preserved, and a target is not required to name a known node (dangling
/// links). The graph is immutable after [`LinkGraph::build`].
#[derive(Debug)]
pub struct LinkGraph {
    outgoing: HashMap<NodeId, Vec<NodeId>>,
    /// Reverse adjacency, precomputed once at build time: for each known
    /// node, the known nodes whose outgoing list mentions it (each source
    /// listed once, ascending id).
    incoming: HashMap<NodeId, Vec<NodeId>>,
    /// Known node ids in ascending order. All iteration goes through this
    /// list so results never depend on hash-map ordering.
    order: Vec<NodeId>,
}

impl LinkGraph {
    /// Builds a graph from (node, outgoing links) pairs.
    ///
    /// # Errors
    /// Returns `MalformedInput` if the same node id is supplied more than
    /// once. A duplicate key means the upstream loader produced the node
    /// twice, so it is rejected even when both edge lists agree.
    pub fn build<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, Vec<NodeId>)>,
    {
        let mut outgoing: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for (node, links) in pairs {
            if outgoing.contains_key(&node) {
                return Err(LinkRankError::MalformedInput { node });
            }
            outgoing.insert(node, links);
        }

        let mut order: Vec<NodeId> = outgoing.keys().cloned().collect();
        order.sort_unstable();

        let mut incoming: HashMap<NodeId, Vec<NodeId>> =
            order.iter().map(|n| (n.clone(), Vec::new())).collect();
        for source in &order {
            let mut seen: HashSet<&str> = HashSet::new();
            for target in &outgoing[source] {
                // Presence, not count: a source pointing at the same target
                // twice is still one incoming neighbor.
                if seen.insert(target) {
                    if let Some(sources) = incoming.get_mut(target) {
                        sources.push(source.clone());
                    }
                }
            }
        }

        Ok(Self {
            outgoing,
            incoming,
            order,
        })
    }

    /// Number of known nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Known node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The outgoing list of `node`, duplicates preserved.
    ///
    /// # Errors
    /// Returns `UnknownNode` if `node` is not a known node.
    pub fn outgoing_links(&self, node: &str) -> Result<&[NodeId]> {
        self.outgoing
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| LinkRankError::UnknownNode(node.to_string()))
    }

    /// Every known node whose outgoing list contains `node`, each listed
    /// once, in ascending id order.
    ///
    /// # Errors
    /// Returns `UnknownNode` if `node` is not a known node.
    pub fn incoming_nodes(&self, node: &str) -> Result<&[NodeId]> {
        self.incoming
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| LinkRankError::UnknownNode(node.to_string()))
    }
}
