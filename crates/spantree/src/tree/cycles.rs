//! Fundamental cycles of the back edges relative to the current tree.

use crate::error::TreeError;
use crate::graph::Graph;
use crate::sparse::EdgeRecord;

use super::types::{Cycle, CycleScan};

impl Graph {
    /// Report the cycle closed by every edge outside the tree.
    ///
    /// Each undirected back edge is reported once, from its `(i, j)` record
    /// with `i < j`. A lone `(i, j)` record with `i > j` (no counterpart) is
    /// scanned as well. Back edges whose endpoints the tree never reached are
    /// skipped.
    pub fn find_cycles(&self) -> Result<CycleScan, TreeError> {
        if !self.has_tree() {
            return Err(TreeError::NoTree);
        }
        let mut scan = CycleScan::default();
        for rec in self.index.iter() {
            if rec.in_tree || !self.is_canonical(rec) {
                continue;
            }
            match self.cycle_through(rec.i, rec.j) {
                Some(vertices) => scan.cycles.push(Cycle {
                    edge: rec.endpoints(),
                    vertices,
                }),
                None => tracing::debug!(i = rec.i, j = rec.j, "back edge outside the tree"),
            }
        }
        tracing::debug!(cycles = scan.cycles.len(), "cycle scan done");
        Ok(scan)
    }

    fn is_canonical(&self, rec: &EdgeRecord) -> bool {
        rec.i < rec.j || !self.index.contains(rec.j, rec.i)
    }

    /// `v`, its father, its grandfather, … up to and including the root.
    ///
    /// `None` when `v` was not reached by the current tree.
    pub fn ancestor_chain(&self, v: usize) -> Option<Vec<usize>> {
        let mut chain = Vec::new();
        let mut cur = v;
        loop {
            let father = self.vertices.get(cur)?.father?;
            chain.push(cur);
            if father == cur {
                return Some(chain);
            }
            if chain.len() > self.capacity() {
                tracing::warn!(v, "father relation does not reach a root");
                return None;
            }
            cur = father;
        }
    }

    /// Vertices of the cycle closed by `(i, j)`.
    ///
    /// The common ancestor is the first vertex of `i`'s chain, walking
    /// upward, that occurs anywhere in `j`'s chain.
    fn cycle_through(&self, i: usize, j: usize) -> Option<Vec<usize>> {
        let up_i = self.ancestor_chain(i)?;
        let up_j = self.ancestor_chain(j)?;
        let (m, e) = up_i
            .iter()
            .enumerate()
            .find_map(|(m, a)| up_j.iter().position(|b| b == a).map(|e| (m, e)))?;
        let mut cycle = up_j[..=e].to_vec();
        cycle.extend(up_i[..m].iter().rev());
        Some(cycle)
    }
}
