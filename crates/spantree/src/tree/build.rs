//! Level-order spanning tree (and forest) construction.

use crate::error::TreeError;
use crate::graph::Graph;

use super::types::{ForestReport, TreeReport, TreeStep};

impl Graph {
    /// Grow the spanning tree of `root`'s component.
    ///
    /// Clears earlier tree state first. Vertices outside the component keep
    /// level 0 and no father.
    pub fn build_spanning_tree(&mut self, root: usize) -> Result<TreeReport, TreeError> {
        self.check_root(root)?;
        self.reset_tree();
        let report = self.grow_from(root);
        tracing::debug!(root, reached = report.vertex_count(), "spanning tree built");
        Ok(report)
    }

    /// Grow a tree from `first_root`, then one from every still unclaimed
    /// vertex that has an edge, in ascending id order.
    pub fn build_spanning_forest(&mut self, first_root: usize) -> Result<ForestReport, TreeError> {
        self.check_root(first_root)?;
        self.reset_tree();
        let mut trees = vec![self.grow_from(first_root)];
        for v in 1..=self.capacity() {
            if !self.vertices[v].claimed && self.index.row_len(v) > 0 {
                trees.push(self.grow_from(v));
            }
        }
        tracing::debug!(first_root, trees = trees.len(), "spanning forest built");
        Ok(ForestReport { trees })
    }

    fn check_root(&self, root: usize) -> Result<(), TreeError> {
        if self.cfg.contains(root) {
            Ok(())
        } else {
            Err(TreeError::InvalidRoot {
                root,
                capacity: self.capacity(),
            })
        }
    }

    fn grow_from(&mut self, root: usize) -> TreeReport {
        let r = &mut self.vertices[root];
        r.level = 1;
        r.father = Some(root);
        r.claimed = true;
        self.roots.push(root);

        let mut steps = Vec::new();
        // Depth never exceeds the vertex count, so this bound always suffices.
        for level in 1..self.capacity() {
            let mut frontier = false;
            for v in 1..=self.capacity() {
                let state = self.vertices[v];
                if state.level != level || state.row_processed {
                    continue;
                }
                frontier = true;
                self.expand_row(v, level, &mut steps);
                self.vertices[v].row_processed = true;
            }
            if !frontier {
                break;
            }
        }
        TreeReport { root, steps }
    }

    /// Claim every unclaimed neighbour reachable over a not-yet-active record of row `v`.
    fn expand_row(&mut self, v: usize, level: usize, steps: &mut Vec<TreeStep>) {
        let mut cursor = self.index.row_first(v);
        while let Some(id) = cursor {
            let rec = *self.index.record(id);
            cursor = rec.next();
            let w = rec.j;
            if rec.in_tree || self.vertices[w].claimed {
                continue;
            }
            self.index.record_mut(id).in_tree = true;
            let child = &mut self.vertices[w];
            child.claimed = true;
            child.father = Some(v);
            child.level = level + 1;
            self.activate_symmetric(w, v);
            tracing::trace!(level, parent = v, child = w, "tree edge");
            steps.push(TreeStep {
                level,
                parent: v,
                child: w,
            });
        }
    }

    /// Mark `(w, v)` as a tree edge, found by walking row `w` up to column `v`.
    fn activate_symmetric(&mut self, w: usize, v: usize) {
        match self.index.find(w, v) {
            Some(id) => self.index.record_mut(id).in_tree = true,
            None => tracing::warn!(i = w, j = v, "symmetric record missing; left inactive"),
        }
    }
}
