//! Contract surface for callers that only insert, delete, build and scan.
//!
//! The operations are methods on [`Graph`]:
//! - `insert_edge(i, j) -> Result<(), EdgeError>`
//! - `delete_edge(i, j) -> Result<(), EdgeError>`
//! - `build_spanning_tree(root) -> Result<TreeReport, TreeError>`
//!   (and `build_spanning_forest`)
//! - `list_edges() -> impl Iterator<Item = (usize, usize)>`
//! - `find_cycles() -> Result<CycleScan, TreeError>`
//!
//! The free functions below bundle the usual sequences for one-shot callers.

pub use crate::cfg::{GraphCfg, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use crate::error::{CfgError, EdgeError, GraphError, TreeError};
pub use crate::graph::{Graph, VertexState};
pub use crate::rand::{draw_edges, draw_graph, GeneratorError, RandomGraphCfg, ReplayToken};
pub use crate::tree::{Cycle, CycleScan, ForestReport, TreeReport, TreeStep};

/// Build the tree of `root`'s component and scan its cycles.
pub fn tree_and_cycles(g: &mut Graph, root: usize) -> Result<(TreeReport, CycleScan), TreeError> {
    let tree = g.build_spanning_tree(root)?;
    let cycles = g.find_cycles()?;
    Ok((tree, cycles))
}

/// Build a forest starting at `first_root` and scan its cycles.
pub fn forest_and_cycles(
    g: &mut Graph,
    first_root: usize,
) -> Result<(ForestReport, CycleScan), TreeError> {
    let forest = g.build_spanning_forest(first_root)?;
    let cycles = g.find_cycles()?;
    Ok((forest, cycles))
}
