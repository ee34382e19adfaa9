//! Sparse edge index, spanning trees and fundamental cycles for small undirected graphs.
//!
//! Layout
//! - `sparse`: arena of directed edge records, threaded by row and by column.
//! - `graph`: undirected edge lifecycle and per-vertex tree state over the index.
//! - `tree`: level-order spanning tree/forest builder and the back-edge cycle scan.
//! - `rand`: seeded random graphs for tests, benches and the CLI.
//!
//! Vertex ids live in `1..=capacity` (see [`cfg::GraphCfg`]); id 0 is reserved.
//!
//! API Policy
//! - External callers (the CLI, printing code) should stick to [`api`]; the
//!   index internals are public for inspection, not for mutation.

pub mod api;
pub mod cfg;
pub mod error;
pub mod graph;
pub mod rand;
pub mod sparse;
pub mod tree;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GraphCfg;
pub use error::{CfgError, EdgeError, GraphError, TreeError};
pub use graph::Graph;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{GraphCfg, DEFAULT_CAPACITY};
    pub use crate::error::{EdgeError, TreeError};
    pub use crate::graph::Graph;
    pub use crate::tree::{Cycle, CycleScan, ForestReport, TreeReport, TreeStep};
}
