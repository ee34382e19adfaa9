//! Serializable views of the core reports.

use serde::Serialize;
use spantree::api::{CycleScan, ForestReport, Graph, TreeReport};

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub capacity: usize,
    pub mode: &'static str,
    pub edges: Vec<(usize, usize)>,
    pub trees: Vec<TreeView>,
    pub vertices: Vec<VertexView>,
    pub cycles: Vec<CycleView>,
    pub has_cycles: bool,
}

#[derive(Debug, Serialize)]
pub struct TreeView {
    pub root: usize,
    pub levels: Vec<LevelView>,
}

#[derive(Debug, Serialize)]
pub struct LevelView {
    pub level: usize,
    pub steps: Vec<StepView>,
}

/// One claimed child with both directed halves of its tree edge.
#[derive(Debug, Serialize)]
pub struct StepView {
    pub child: usize,
    pub edge: (usize, usize),
    pub symmetric: (usize, usize),
}

/// Reached vertex with its level and father.
#[derive(Debug, Serialize)]
pub struct VertexView {
    pub id: usize,
    pub level: usize,
    pub father: usize,
}

#[derive(Debug, Serialize)]
pub struct CycleView {
    pub edge: (usize, usize),
    pub vertices: Vec<usize>,
}

impl RunReport {
    pub fn tree(g: &Graph, tree: &TreeReport, scan: &CycleScan) -> Self {
        Self::assemble(g, "tree", std::slice::from_ref(tree), scan)
    }

    pub fn forest(g: &Graph, forest: &ForestReport, scan: &CycleScan) -> Self {
        Self::assemble(g, "forest", &forest.trees, scan)
    }

    fn assemble(g: &Graph, mode: &'static str, trees: &[TreeReport], scan: &CycleScan) -> Self {
        let vertices = (1..=g.capacity())
            .filter_map(|id| {
                g.father(id).map(|father| VertexView {
                    id,
                    level: g.level(id),
                    father,
                })
            })
            .collect();
        Self {
            capacity: g.capacity(),
            mode,
            edges: g.list_edges().filter(|&(i, j)| i < j).collect(),
            trees: trees.iter().map(TreeView::from).collect(),
            vertices,
            cycles: scan
                .cycles
                .iter()
                .map(|c| CycleView {
                    edge: c.edge,
                    vertices: c.vertices.clone(),
                })
                .collect(),
            has_cycles: scan.found(),
        }
    }
}

impl From<&TreeReport> for TreeView {
    fn from(t: &TreeReport) -> Self {
        let levels = t
            .levels()
            .map(|(level, steps)| LevelView {
                level,
                steps: steps
                    .iter()
                    .map(|s| StepView {
                        child: s.child,
                        edge: s.edge(),
                        symmetric: s.symmetric(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            root: t.root,
            levels,
        }
    }
}
