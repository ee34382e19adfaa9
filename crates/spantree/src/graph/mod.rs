//! Undirected graph on top of the sparse index, plus per-vertex tree state.
//!
//! An undirected edge `{x, y}` is the pair of directed records `(x, y)` and
//! `(y, x)`. `Graph` inserts and deletes both halves together; the index
//! alone never does.
//!
//! Tree state (levels, fathers and the activation flags) lives here because
//! every mutation of the edge set invalidates it. The builder and the cycle
//! scan in [`crate::tree`] read and write it through `pub(crate)` fields.

mod edges;

pub use edges::VertexState;

use crate::cfg::GraphCfg;
use crate::error::{CfgError, EdgeError, GraphError};
use crate::sparse::{ColumnIter, EdgeRecord, RowIter, SparseIndex};

/// Graph context: owns the index, the vertex state and the current tree roots.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) cfg: GraphCfg,
    pub(crate) index: SparseIndex,
    pub(crate) vertices: Vec<VertexState>, // index 0 unused
    /// Roots of the trees built since the last reset; empty means no tree.
    pub(crate) roots: Vec<usize>,
}

impl Graph {
    pub fn new(cfg: GraphCfg) -> Result<Self, CfgError> {
        cfg.validate()?;
        Ok(Self::with_valid_cfg(cfg))
    }

    fn with_valid_cfg(cfg: GraphCfg) -> Self {
        Self {
            cfg,
            index: SparseIndex::with_valid_cfg(cfg),
            vertices: vec![VertexState::default(); cfg.capacity + 1],
            roots: Vec::new(),
        }
    }

    /// Build a graph from undirected edges. Repeated edges are skipped.
    pub fn from_edges(cfg: GraphCfg, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut g = Self::new(cfg)?;
        for &(x, y) in edges {
            match g.insert_edge(x, y) {
                Ok(()) => {}
                Err(EdgeError::AlreadyExists { .. }) => {
                    tracing::debug!(x, y, "duplicate edge skipped");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(g)
    }

    /// Every pair of distinct vertices joined by an edge.
    pub fn complete(cfg: GraphCfg) -> Result<Self, GraphError> {
        let n = cfg.capacity;
        let edges: Vec<(usize, usize)> = (1..=n)
            .flat_map(|x| (x + 1..=n).map(move |y| (x, y)))
            .collect();
        Self::from_edges(cfg, &edges)
    }

    #[inline]
    pub fn cfg(&self) -> GraphCfg {
        self.cfg
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cfg.capacity
    }

    /// Read-only view of the underlying index.
    #[inline]
    pub fn index(&self) -> &SparseIndex {
        &self.index
    }

    /// Number of directed records (twice the undirected edge count when symmetric).
    #[inline]
    pub fn record_count(&self) -> usize {
        self.index.len()
    }

    /// Number of undirected edges, counting each symmetric pair once.
    pub fn edge_count(&self) -> usize {
        self.index
            .iter()
            .filter(|r| r.i < r.j || !self.index.contains(r.j, r.i))
            .count()
    }

    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.index.contains(i, j)
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.index.row_len(v)
    }

    pub fn row(&self, v: usize) -> RowIter<'_> {
        self.index.row(v)
    }

    pub fn column(&self, v: usize) -> ColumnIter<'_> {
        self.index.column(v)
    }

    /// Directed pairs in row-major order, ascending column within each row.
    pub fn list_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.index.iter().map(EdgeRecord::endpoints)
    }

    /// Distance from the root of its tree (root = 1); 0 when not reached.
    pub fn level(&self, v: usize) -> usize {
        self.vertices.get(v).map_or(0, |s| s.level)
    }

    /// Tree parent; a root is its own father.
    pub fn father(&self, v: usize) -> Option<usize> {
        self.vertices.get(v).and_then(|s| s.father)
    }

    pub fn is_claimed(&self, v: usize) -> bool {
        self.vertices.get(v).is_some_and(|s| s.claimed)
    }

    pub fn is_row_processed(&self, v: usize) -> bool {
        self.vertices.get(v).is_some_and(|s| s.row_processed)
    }

    pub fn vertex(&self, v: usize) -> Option<&VertexState> {
        self.vertices.get(v).filter(|_| self.cfg.contains(v))
    }

    /// Roots of the trees built since the graph last changed.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn has_tree(&self) -> bool {
        !self.roots.is_empty()
    }

    pub fn is_tree_edge(&self, i: usize, j: usize) -> bool {
        self.index
            .find(i, j)
            .is_some_and(|id| self.index.record(id).in_tree)
    }

    /// Directed records currently selected into the tree, row-major.
    pub fn tree_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.index
            .iter()
            .filter(|r| r.in_tree)
            .map(EdgeRecord::endpoints)
    }

    /// Drop every level, father and activation flag.
    pub fn reset_tree(&mut self) {
        self.vertices.fill(VertexState::default());
        self.index.clear_tree_flags();
        self.roots.clear();
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<(), EdgeError> {
        if self.cfg.contains(v) {
            Ok(())
        } else {
            Err(EdgeError::OutOfRange {
                vertex: v,
                capacity: self.cfg.capacity,
            })
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::with_valid_cfg(GraphCfg::default())
    }
}
