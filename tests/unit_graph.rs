// tests/unit_graph.rs
//! Tests for link-graph construction and accessors.

use linkrank::{LinkGraph, LinkRankError};

fn graph(pairs: &[(&str, &[&str])]) -> LinkGraph {
    LinkGraph::build(pairs.iter().map(|(node, links)| {
        (
            (*node).to_string(),
            links.iter().map(|l| (*l).to_string()).collect(),
        )
    }))
    .expect("graph should build")
}

#[test]
fn nodes_are_listed_in_ascending_order() {
    let g = graph(&[("c", &[]), ("a", &[]), ("b", &[])]);
    let nodes: Vec<&str> = g.nodes().collect();
    assert_eq!(nodes, vec!["a", "b", "c"]);
    assert_eq!(g.node_count(), 3);
}

#[test]
fn duplicate_node_submission_is_malformed() {
    let err = LinkGraph::build(vec![
        ("a".to_string(), vec!["b".to_string()]),
        ("a".to_string(), vec!["c".to_string()]),
    ])
    .unwrap_err();
    assert!(matches!(err, LinkRankError::MalformedInput { node } if node == "a"));
}

#[test]
fn duplicate_submission_with_identical_links_is_still_malformed() {
    // A duplicate key means the loader produced the node twice; agreement
    // between the two lists does not make the input well-formed.
    let err = LinkGraph::build(vec![
        ("a".to_string(), vec!["b".to_string()]),
        ("a".to_string(), vec!["b".to_string()]),
    ])
    .unwrap_err();
    assert!(matches!(err, LinkRankError::MalformedInput { .. }));
}

#[test]
fn outgoing_links_preserve_duplicates_and_order() {
    let g = graph(&[("a", &["b", "b", "c"]), ("b", &[]), ("c", &[])]);
    assert_eq!(g.outgoing_links("a").unwrap(), &["b", "b", "c"]);
}

#[test]
fn unknown_node_is_rejected_by_both_accessors() {
    let g = graph(&[("a", &[])]);
    assert!(matches!(
        g.outgoing_links("zzz").unwrap_err(),
        LinkRankError::UnknownNode(n) if n == "zzz"
    ));
    assert!(matches!(
        g.incoming_nodes("zzz").unwrap_err(),
        LinkRankError::UnknownNode(_)
    ));
}

#[test]
fn incoming_counts_each_source_once() {
    let g = graph(&[("a", &["b", "b"]), ("b", &[])]);
    assert_eq!(g.incoming_nodes("b").unwrap(), &["a"]);
}

#[test]
fn incoming_sources_are_listed_in_ascending_order() {
    let g = graph(&[("a", &[]), ("c", &["a"]), ("b", &["a"])]);
    assert_eq!(g.incoming_nodes("a").unwrap(), &["b", "c"]);
}

#[test]
fn dangling_targets_are_permitted_but_not_known() {
    let g = graph(&[("a", &["missing"])]);
    assert_eq!(g.outgoing_links("a").unwrap(), &["missing"]);
    assert!(matches!(
        g.incoming_nodes("missing").unwrap_err(),
        LinkRankError::UnknownNode(_)
    ));
}

#[test]
fn self_loop_counts_as_own_predecessor() {
    let g = graph(&[("a", &["a", "b"]), ("b", &[])]);
    assert_eq!(g.incoming_nodes("a").unwrap(), &["a"]);
}

#[test]
fn empty_input_builds_an_empty_graph() {
    let g = LinkGraph::build(Vec::new()).unwrap();
    assert_eq!(g.node_count(), 0);
}
