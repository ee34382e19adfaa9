//! Report types returned by the builder and the cycle scan.

/// One tree edge as discovered: `parent` (at `level`) claimed `child` (at `level + 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeStep {
    pub level: usize,
    pub parent: usize,
    pub child: usize,
}

impl TreeStep {
    /// The directed record that was scanned.
    #[inline]
    pub fn edge(&self) -> (usize, usize) {
        (self.parent, self.child)
    }

    /// Its counterpart, activated alongside.
    #[inline]
    pub fn symmetric(&self) -> (usize, usize) {
        (self.child, self.parent)
    }
}

/// Tree grown from one root, steps in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeReport {
    pub root: usize,
    pub steps: Vec<TreeStep>,
}

impl TreeReport {
    /// Vertices in the tree, root included.
    pub fn vertex_count(&self) -> usize {
        self.steps.len() + 1
    }

    /// Steps grouped by the parent's level, in increasing level order.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &[TreeStep])> + '_ {
        self.steps
            .chunk_by(|a, b| a.level == b.level)
            .map(|chunk| (chunk[0].level, chunk))
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.steps.iter().map(TreeStep::edge)
    }
}

/// One tree per component that has edges, first root first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForestReport {
    pub trees: Vec<TreeReport>,
}

impl ForestReport {
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.trees.iter().map(|t| t.root)
    }

    pub fn edge_count(&self) -> usize {
        self.trees.iter().map(|t| t.steps.len()).sum()
    }
}

/// Cycle closed by the back edge `edge = (i, j)`.
///
/// `vertices` runs from `j` up to the common ancestor and back down to `i`;
/// the back edge itself closes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    pub edge: (usize, usize),
    pub vertices: Vec<usize>,
}

impl Cycle {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Result of one cycle scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleScan {
    pub cycles: Vec<Cycle>,
}

impl CycleScan {
    /// Whether any cycle was found at all.
    #[inline]
    pub fn found(&self) -> bool {
        !self.cycles.is_empty()
    }
}
