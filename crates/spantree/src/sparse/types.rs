//! Record and id types for the sparse index.

/// Arena slot of an edge record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

/// One directed arc `i → j` plus its row/column links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub i: usize,
    pub j: usize,
    /// Selected into the current spanning tree.
    pub in_tree: bool,
    pub(crate) prev: Option<EdgeId>, // row i, smaller column
    pub(crate) next: Option<EdgeId>, // row i, larger column
    pub(crate) up: Option<EdgeId>,   // column j, smaller row
    pub(crate) down: Option<EdgeId>, // column j, larger row
    pub(crate) live: bool,
}

impl EdgeRecord {
    pub(crate) fn new(i: usize, j: usize) -> Self {
        Self {
            i,
            j,
            in_tree: false,
            prev: None,
            next: None,
            up: None,
            down: None,
            live: true,
        }
    }

    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    #[inline]
    pub fn prev(&self) -> Option<EdgeId> {
        self.prev
    }

    #[inline]
    pub fn next(&self) -> Option<EdgeId> {
        self.next
    }

    #[inline]
    pub fn up(&self) -> Option<EdgeId> {
        self.up
    }

    #[inline]
    pub fn down(&self) -> Option<EdgeId> {
        self.down
    }
}
