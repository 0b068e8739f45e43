pub mod error;
pub mod graph;
pub mod loader;
pub mod report;

pub use error::{LinkRankError, Result};
pub use graph::{LinkGraph, NodeId};
