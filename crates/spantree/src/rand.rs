//! Seeded random graphs (independent edge coins + replay tokens).
//!
//! Model
//! - Every unordered pair `{x, y}` of `1..=vertices` becomes an edge with
//!   probability `edge_prob`, pairs visited in row-major order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a stream of graphs can be regenerated one by one.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::GraphCfg;
use crate::error::GraphError;
use crate::graph::Graph;

/// Random graph parameters.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    /// Vertex bound of the produced graph.
    pub capacity: usize,
    /// Edges are drawn among `1..=vertices`; the rest stay isolated.
    pub vertices: usize,
    pub edge_prob: f64,
}

impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            capacity: crate::cfg::DEFAULT_CAPACITY,
            vertices: crate::cfg::DEFAULT_CAPACITY,
            edge_prob: 0.2,
        }
    }
}

impl RandomGraphCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        GraphCfg::with_capacity(self.capacity)
            .validate()
            .map_err(|e| GeneratorError::Graph(e.into()))?;
        if self.vertices > self.capacity {
            return Err(GeneratorError::invalid(format!(
                "vertices ({}) must not exceed capacity ({})",
                self.vertices, self.capacity
            )));
        }
        if !(0.0..=1.0).contains(&self.edge_prob) {
            return Err(GeneratorError::invalid("edge_prob must lie in [0, 1]"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer on seed and index.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Error type of the generator.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    Graph(GraphError),
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::Graph(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

impl From<GraphError> for GeneratorError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// Undirected edge list `(x, y)`, `x < y`, drawn for `tok`.
pub fn draw_edges(cfg: RandomGraphCfg, tok: ReplayToken) -> Result<Vec<(usize, usize)>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices;
    let mut edges = Vec::new();
    for x in 1..=n {
        for y in x + 1..=n {
            if rng.gen_bool(cfg.edge_prob) {
                edges.push((x, y));
            }
        }
    }
    Ok(edges)
}

/// Draw a random graph for `tok`.
pub fn draw_graph(cfg: RandomGraphCfg, tok: ReplayToken) -> Result<Graph, GeneratorError> {
    let edges = draw_edges(cfg, tok)?;
    let g = Graph::from_edges(GraphCfg::with_capacity(cfg.capacity), &edges)?;
    tracing::debug!(seed = tok.seed, index = tok.index, edges = edges.len(), "random graph drawn");
    Ok(g)
}
