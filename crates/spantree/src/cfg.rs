//! Capacity configuration for the vertex domain.
//!
//! Policy
//! - The structure targets small, bounded vertex sets. Headers for every id in
//!   `1..=capacity` are allocated up front, so the bound is checked once here
//!   instead of at every call site.

use crate::error::CfgError;

/// Vertex bound used when nothing else is requested.
pub const DEFAULT_CAPACITY: usize = 30;
/// Largest accepted vertex bound.
pub const MAX_CAPACITY: usize = 4096;

/// Graph configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphCfg {
    /// Vertex ids live in `1..=capacity`; id 0 is reserved.
    pub capacity: usize,
}

impl Default for GraphCfg {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl GraphCfg {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn validate(&self) -> Result<(), CfgError> {
        if self.capacity == 0 {
            return Err(CfgError::ZeroCapacity);
        }
        if self.capacity > MAX_CAPACITY {
            return Err(CfgError::CapacityTooLarge {
                capacity: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }

    /// True when `v` is a usable vertex id.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        (1..=self.capacity).contains(&v)
    }
}
