//! Edge lifecycle: undirected insert/delete over the directed index.

use crate::error::EdgeError;

use super::Graph;

/// Per-vertex tree state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexState {
    /// Distance from the root, root = 1; 0 = not reached.
    pub level: usize,
    /// Tree parent; roots point to themselves.
    pub father: Option<usize>,
    /// The vertex's row has been scanned by the builder.
    pub row_processed: bool,
    /// The vertex has been taken into a tree.
    pub claimed: bool,
}

impl Graph {
    /// Insert the undirected edge `{x, y}` as the records `(x, y)` and `(y, x)`.
    ///
    /// Endpoints are validated before the index is touched. If `(x, y)` is
    /// already stored the call fails with `AlreadyExists` and nothing
    /// changes. Clears any previously built tree.
    pub fn insert_edge(&mut self, x: usize, y: usize) -> Result<(), EdgeError> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        if x == y {
            return Err(EdgeError::SelfLoop { vertex: x });
        }
        self.index.insert(x, y)?;
        match self.index.insert(y, x) {
            Ok(_) => {}
            Err(EdgeError::AlreadyExists { .. }) => {
                tracing::warn!(i = y, j = x, "symmetric record was already present");
            }
            Err(e) => return Err(e),
        }
        self.reset_tree();
        tracing::debug!(x, y, "edge inserted");
        Ok(())
    }

    /// Delete both directed records of `{x, y}`.
    ///
    /// Each direction is attempted independently. The result is `Ok` only if
    /// both existed; otherwise it names the first missing direction, while
    /// the other one is still removed when present. Clears any previously
    /// built tree if something was removed.
    pub fn delete_edge(&mut self, x: usize, y: usize) -> Result<(), EdgeError> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        let forward = self.index.remove(x, y).map(|_| ());
        let backward = self.index.remove(y, x).map(|_| ());
        if forward.is_ok() || backward.is_ok() {
            self.reset_tree();
        }
        tracing::debug!(
            x,
            y,
            forward = forward.is_ok(),
            backward = backward.is_ok(),
            "edge delete"
        );
        forward.and(backward)
    }
}
