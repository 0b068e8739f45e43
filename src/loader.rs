// src/loader.rs
//! Edge-list loader: one file per page, line-delimited neighbor ids.
//!
//! This is the I/O adapter in front of the graph core. It walks a local
//! directory of page files (previously staged from remote storage), names
//! each node by its path relative to the root, and parses the file body
//! into an outgoing-link list. The core never performs I/O itself.

use std::fs;
use std::path::Path;

use colored::Colorize;
use walkdir::WalkDir;

use crate::graph::NodeId;

/// Reads every regular file under `root` into a (node, outgoing links)
/// pair. Links are the trimmed, non-empty lines of the file.
///
/// A file that cannot be read is logged to stderr and omitted; loading
/// continues with the remaining files, so callers always receive an
/// already-cleaned mapping.
#[must_use]
pub fn load_directory(root: &Path) -> Vec<(NodeId, Vec<NodeId>)> {
    let mut pages = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("{} {e}", "warning:".yellow().bold());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let name = node_name(root, entry.path());
        match fs::read_to_string(entry.path()) {
            Ok(content) => pages.push((name, parse_links(&content))),
            Err(e) => {
                eprintln!("{} skipping {name}: {e}", "warning:".yellow().bold());
            }
        }
    }

    pages
}

fn node_name(root: &Path, path: &Path) -> NodeId {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

fn parse_links(content: &str) -> Vec<NodeId> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
