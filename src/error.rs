// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("malformed edge-list input: node {node:?} supplied more than once")]
    MalformedInput { node: String },

    #[error("unknown node: {0:?}")]
    UnknownNode(String),

    #[error("graph has no nodes; statistics and ranks are undefined")]
    EmptyGraph,
}

pub type Result<T> = std::result::Result<T, LinkRankError>;
