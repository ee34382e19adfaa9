//! Sparse Edge Index: an arena of directed edge records threaded twice.
//!
//! Purpose
//! - Store each directed arc `(i, j)` once and make it reachable from two
//!   independent orders: row `i` ascending by column, and column `j`
//!   ascending by row.
//! - Insert, look up and delete in O(degree) by walking a single chain.
//!
//! Model
//! - Every record carries four optional links (`prev`/`next` along its row,
//!   `up`/`down` along its column). Links are arena slots, not references, so
//!   unlinking a record never leaves a neighbour pointing at freed memory.
//! - Each row and column owns a header with its first record and length. A
//!   record with no `prev` (resp. `up`) is the head of its row (resp. column).
//! - Deleted slots go to a free list and are reused by later insertions.
//!
//! The index knows nothing about undirected edges; keeping `(i, j)` and
//! `(j, i)` in sync is the job of [`crate::graph::Graph`].

mod index;
mod types;

pub use index::{ColumnIter, RowIter, SparseIndex};
pub use types::{EdgeId, EdgeRecord};
