//! Chain walks, insertion and unlinking for the sparse index.

use std::cmp::Ordering;

use crate::cfg::GraphCfg;
use crate::error::{CfgError, EdgeError};

use super::types::{EdgeId, EdgeRecord};

/// Head of one row or column chain.
#[derive(Clone, Copy, Debug, Default)]
struct Header {
    first: Option<EdgeId>,
    len: usize,
}

/// Where a key falls inside a chain.
enum Slot {
    Between {
        before: Option<EdgeId>,
        after: Option<EdgeId>,
    },
    Occupied(EdgeId),
}

/// Doubly threaded sparse edge index over vertex ids `1..=capacity`.
#[derive(Clone, Debug)]
pub struct SparseIndex {
    capacity: usize,
    slots: Vec<EdgeRecord>,
    free: Vec<EdgeId>,
    rows: Vec<Header>, // index 0 unused
    cols: Vec<Header>, // index 0 unused
    len: usize,
}

impl SparseIndex {
    /// Empty index with headers for `1..=cfg.capacity`.
    pub fn new(cfg: GraphCfg) -> Result<Self, CfgError> {
        cfg.validate()?;
        Ok(Self::with_valid_cfg(cfg))
    }

    // Caller has already run `cfg.validate()`.
    pub(crate) fn with_valid_cfg(cfg: GraphCfg) -> Self {
        let capacity = cfg.capacity;
        Self {
            capacity,
            slots: Vec::new(),
            free: Vec::new(),
            rows: vec![Header::default(); capacity + 1],
            cols: vec![Header::default(); capacity + 1],
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live records.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn row_len(&self, i: usize) -> usize {
        self.rows.get(i).map_or(0, |h| h.len)
    }

    pub fn column_len(&self, j: usize) -> usize {
        self.cols.get(j).map_or(0, |h| h.len)
    }

    /// First record of row `i`, if any.
    pub fn row_first(&self, i: usize) -> Option<EdgeId> {
        self.rows.get(i).and_then(|h| h.first)
    }

    /// First record of column `j`, if any.
    pub fn column_first(&self, j: usize) -> Option<EdgeId> {
        self.cols.get(j).and_then(|h| h.first)
    }

    /// Live record behind `id`.
    pub fn get(&self, id: EdgeId) -> Option<&EdgeRecord> {
        self.slots.get(id.0).filter(|r| r.live)
    }

    // Ids reached through chain links always name live slots.
    #[inline]
    pub(crate) fn record(&self, id: EdgeId) -> &EdgeRecord {
        &self.slots[id.0]
    }

    #[inline]
    pub(crate) fn record_mut(&mut self, id: EdgeId) -> &mut EdgeRecord {
        &mut self.slots[id.0]
    }

    fn check_vertex(&self, v: usize) -> Result<(), EdgeError> {
        if (1..=self.capacity).contains(&v) {
            Ok(())
        } else {
            Err(EdgeError::OutOfRange {
                vertex: v,
                capacity: self.capacity,
            })
        }
    }

    /// Walk row `i` by ascending column until reaching `j` or passing it.
    fn row_slot(&self, i: usize, j: usize) -> Slot {
        let mut before = None;
        let mut cursor = self.row_first(i);
        while let Some(id) = cursor {
            let rec = self.record(id);
            match rec.j.cmp(&j) {
                Ordering::Less => {
                    before = Some(id);
                    cursor = rec.next;
                }
                Ordering::Equal => return Slot::Occupied(id),
                Ordering::Greater => break,
            }
        }
        Slot::Between {
            before,
            after: cursor,
        }
    }

    /// Walk column `j` by ascending row until reaching `i` or passing it.
    fn column_slot(&self, i: usize, j: usize) -> Slot {
        let mut before = None;
        let mut cursor = self.column_first(j);
        while let Some(id) = cursor {
            let rec = self.record(id);
            match rec.i.cmp(&i) {
                Ordering::Less => {
                    before = Some(id);
                    cursor = rec.down;
                }
                Ordering::Equal => return Slot::Occupied(id),
                Ordering::Greater => break,
            }
        }
        Slot::Between {
            before,
            after: cursor,
        }
    }

    /// Locate the record `(i, j)`; out-of-range keys are simply absent.
    pub fn find(&self, i: usize, j: usize) -> Option<EdgeId> {
        if self.check_vertex(i).is_err() || self.check_vertex(j).is_err() {
            return None;
        }
        match self.row_slot(i, j) {
            Slot::Occupied(id) => Some(id),
            Slot::Between { .. } => None,
        }
    }

    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.find(i, j).is_some()
    }

    /// Insert the directed record `(i, j)` into row `i` and column `j`.
    ///
    /// Both chains stay strictly ascending. An existing `(i, j)` is reported
    /// as `AlreadyExists` and leaves the index untouched.
    pub fn insert(&mut self, i: usize, j: usize) -> Result<EdgeId, EdgeError> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        if i == j {
            return Err(EdgeError::SelfLoop { vertex: i });
        }
        let (prev, next) = match self.row_slot(i, j) {
            Slot::Occupied(_) => return Err(EdgeError::AlreadyExists { i, j }),
            Slot::Between { before, after } => (before, after),
        };
        let (up, down) = match self.column_slot(i, j) {
            Slot::Occupied(_) => return Err(EdgeError::AlreadyExists { i, j }),
            Slot::Between { before, after } => (before, after),
        };

        let mut rec = EdgeRecord::new(i, j);
        rec.prev = prev;
        rec.next = next;
        rec.up = up;
        rec.down = down;
        let id = self.alloc(rec);

        match prev {
            Some(p) => self.slots[p.0].next = Some(id),
            None => self.rows[i].first = Some(id),
        }
        if let Some(n) = next {
            self.slots[n.0].prev = Some(id);
        }
        match up {
            Some(u) => self.slots[u.0].down = Some(id),
            None => self.cols[j].first = Some(id),
        }
        if let Some(d) = down {
            self.slots[d.0].up = Some(id);
        }
        self.rows[i].len += 1;
        self.cols[j].len += 1;
        self.len += 1;
        tracing::trace!(i, j, slot = id.0, "record linked");
        Ok(id)
    }

    /// Remove the directed record `(i, j)` from both of its chains.
    ///
    /// Returns the unlinked record; its slot is reclaimed for later inserts.
    pub fn remove(&mut self, i: usize, j: usize) -> Result<EdgeRecord, EdgeError> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        let id = match self.row_slot(i, j) {
            Slot::Occupied(id) => id,
            Slot::Between { .. } => return Err(EdgeError::NotFound { i, j }),
        };
        let rec = *self.record(id);

        // Row unlink; a missing neighbour on either side is a chain end.
        match rec.prev {
            Some(p) => self.slots[p.0].next = rec.next,
            None => self.rows[i].first = rec.next,
        }
        if let Some(n) = rec.next {
            self.slots[n.0].prev = rec.prev;
        }
        // Column unlink, same rule along up/down.
        match rec.up {
            Some(u) => self.slots[u.0].down = rec.down,
            None => self.cols[j].first = rec.down,
        }
        if let Some(d) = rec.down {
            self.slots[d.0].up = rec.up;
        }

        self.rows[i].len -= 1;
        self.cols[j].len -= 1;
        self.len -= 1;
        self.release(id);
        tracing::trace!(i, j, slot = id.0, "record unlinked");
        Ok(rec)
    }

    fn alloc(&mut self, rec: EdgeRecord) -> EdgeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = rec;
                id
            }
            None => {
                self.slots.push(rec);
                EdgeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: EdgeId) {
        let slot = &mut self.slots[id.0];
        slot.live = false;
        slot.in_tree = false;
        slot.prev = None;
        slot.next = None;
        slot.up = None;
        slot.down = None;
        self.free.push(id);
    }

    /// Clear the tree flag on every live record.
    pub fn clear_tree_flags(&mut self) {
        for rec in self.slots.iter_mut().filter(|r| r.live) {
            rec.in_tree = false;
        }
    }

    /// Records of row `i` by ascending column. Restartable: each call walks from the header.
    pub fn row(&self, i: usize) -> RowIter<'_> {
        RowIter {
            index: self,
            cursor: self.row_first(i),
        }
    }

    /// Records of column `j` by ascending row.
    pub fn column(&self, j: usize) -> ColumnIter<'_> {
        ColumnIter {
            index: self,
            cursor: self.column_first(j),
        }
    }

    /// All records, row-major and column-ascending within each row.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeRecord> + '_ {
        (1..=self.capacity).flat_map(move |i| self.row(i))
    }
}

/// Lazy walk along one row chain.
#[derive(Clone)]
pub struct RowIter<'a> {
    index: &'a SparseIndex,
    cursor: Option<EdgeId>,
}

impl<'a> Iterator for RowIter<'a> {
    type Item = &'a EdgeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let rec = self.index.record(id);
        self.cursor = rec.next;
        Some(rec)
    }
}

/// Lazy walk along one column chain.
#[derive(Clone)]
pub struct ColumnIter<'a> {
    index: &'a SparseIndex,
    cursor: Option<EdgeId>,
}

impl<'a> Iterator for ColumnIter<'a> {
    type Item = &'a EdgeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let rec = self.index.record(id);
        self.cursor = rec.down;
        Some(rec)
    }
}
