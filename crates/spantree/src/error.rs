//! Error types surfaced by the index, the edge lifecycle and the tree builder.
//!
//! All of them are recoverable outcomes; nothing here aborts a run.

use std::fmt;

/// Failures of edge insertion, lookup and deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeError {
    /// Endpoint outside `1..=capacity`.
    OutOfRange { vertex: usize, capacity: usize },
    /// Both endpoints are the same vertex.
    SelfLoop { vertex: usize },
    /// The directed record `(i, j)` is already stored.
    AlreadyExists { i: usize, j: usize },
    /// The directed record `(i, j)` is not stored.
    NotFound { i: usize, j: usize },
}

impl fmt::Display for EdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { vertex, capacity } => {
                write!(f, "vertex {vertex} is outside the id range 1..={capacity}")
            }
            Self::SelfLoop { vertex } => write!(f, "self-loop on vertex {vertex} is not allowed"),
            Self::AlreadyExists { i, j } => write!(f, "edge ({i},{j}) is already registered"),
            Self::NotFound { i, j } => write!(f, "edge ({i},{j}) does not exist"),
        }
    }
}

impl std::error::Error for EdgeError {}

/// Failures of spanning-tree construction and cycle scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// Root outside `1..=capacity`.
    InvalidRoot { root: usize, capacity: usize },
    /// Cycles were requested before any tree was built (or after the graph changed).
    NoTree,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoot { root, capacity } => {
                write!(f, "root {root} is outside the id range 1..={capacity}")
            }
            Self::NoTree => write!(f, "no spanning tree has been built for the current graph"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Rejected configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CfgError {
    ZeroCapacity,
    CapacityTooLarge { capacity: usize, max: usize },
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "capacity must be at least 1"),
            Self::CapacityTooLarge { capacity, max } => {
                write!(f, "capacity {capacity} exceeds the supported maximum {max}")
            }
        }
    }
}

impl std::error::Error for CfgError {}

/// Any of the above, for builders that touch configuration and edges at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphError {
    Cfg(CfgError),
    Edge(EdgeError),
    Tree(TreeError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cfg(e) => write!(f, "invalid configuration: {e}"),
            Self::Edge(e) => write!(f, "edge operation failed: {e}"),
            Self::Tree(e) => write!(f, "tree operation failed: {e}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cfg(e) => Some(e),
            Self::Edge(e) => Some(e),
            Self::Tree(e) => Some(e),
        }
    }
}

impl From<CfgError> for GraphError {
    fn from(e: CfgError) -> Self {
        Self::Cfg(e)
    }
}

impl From<EdgeError> for GraphError {
    fn from(e: EdgeError) -> Self {
        Self::Edge(e)
    }
}

impl From<TreeError> for GraphError {
    fn from(e: TreeError) -> Self {
        Self::Tree(e)
    }
}
