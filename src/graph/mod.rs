// src/graph/mod.rs
pub mod pagerank;
pub mod stats;
pub mod store;

pub use store::{LinkGraph, NodeId};
