//! Spanning trees and fundamental cycles.
//!
//! Purpose
//! - Grow a spanning tree level by level from a root: rows are scanned in
//!   ascending vertex order and each row in ascending column order, so the
//!   tree shape depends only on the edge set and the root.
//! - For every edge left out of the tree, rebuild the two root paths of its
//!   endpoints through the father relation and report the cycle they close.
//!
//! Notes
//! - Three flags are kept apart: `VertexState::claimed` (taken into a tree),
//!   `VertexState::row_processed` (row already scanned) and
//!   `EdgeRecord::in_tree` (record selected as a tree edge).
//! - A root is its own father. That is how the cycle scan recognizes the top
//!   of a chain, for single trees and forests alike.
//!
//! Split: `types.rs` (reports), `build.rs` (builder), `cycles.rs` (cycle scan).

mod build;
mod cycles;
mod types;

pub use types::{Cycle, CycleScan, ForestReport, TreeReport, TreeStep};

#[cfg(test)]
mod tests;
