//! Tree builder and cycle scan: worked examples plus randomized invariants.

use std::collections::BTreeSet;

use super::*;
use crate::cfg::GraphCfg;
use crate::error::TreeError;
use crate::graph::Graph;
use crate::rand::{draw_graph, RandomGraphCfg, ReplayToken};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(GraphCfg::with_capacity(n), edges).unwrap()
}

/// Undirected tree edges as `(min, max)` pairs.
fn undirected_tree_edges(g: &Graph) -> BTreeSet<(usize, usize)> {
    g.tree_edges().map(|(i, j)| (i.min(j), i.max(j))).collect()
}

/// Union-find check that `edges` contain no cycle.
fn is_acyclic(n: usize, edges: &BTreeSet<(usize, usize)>) -> bool {
    let mut parent: Vec<usize> = (0..=n).collect();
    fn find(p: &mut [usize], x: usize) -> usize {
        let mut r = x;
        while p[r] != r {
            r = p[r];
        }
        p[x] = r;
        r
    }
    for &(a, b) in edges {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra == rb {
            return false;
        }
        parent[ra] = rb;
    }
    true
}

#[test]
fn triangle_has_one_cycle() {
    let mut g = graph(5, &[(1, 2), (2, 3), (1, 3)]);
    let report = g.build_spanning_tree(1).unwrap();
    assert_eq!(
        report.steps,
        vec![
            TreeStep {
                level: 1,
                parent: 1,
                child: 2
            },
            TreeStep {
                level: 1,
                parent: 1,
                child: 3
            },
        ]
    );
    assert_eq!(undirected_tree_edges(&g).len(), 2);
    assert!(g.is_tree_edge(2, 1) && g.is_tree_edge(3, 1));
    assert!(!g.is_tree_edge(2, 3) && !g.is_tree_edge(3, 2));

    let scan = g.find_cycles().unwrap();
    assert!(scan.found());
    assert_eq!(scan.cycles.len(), 1);
    let cycle = &scan.cycles[0];
    assert_eq!(cycle.edge, (2, 3));
    assert_eq!(cycle.vertices, vec![3, 1, 2]);
    let set: BTreeSet<_> = cycle.vertices.iter().copied().collect();
    assert_eq!(set, BTreeSet::from([1, 2, 3]));
}

#[test]
fn levels_and_fathers_follow_scan_order() {
    //     1
    //    / \
    //   2   3
    //   |   |
    //   4 - 5
    let mut g = graph(6, &[(1, 2), (1, 3), (2, 4), (3, 5), (4, 5)]);
    let report = g.build_spanning_tree(1).unwrap();
    assert_eq!(g.level(1), 1);
    assert_eq!(g.father(1), Some(1));
    assert_eq!((g.level(2), g.father(2)), (2, Some(1)));
    assert_eq!((g.level(3), g.father(3)), (2, Some(1)));
    assert_eq!((g.level(4), g.father(4)), (3, Some(2)));
    assert_eq!((g.level(5), g.father(5)), (3, Some(3)));
    assert_eq!((g.level(6), g.father(6)), (0, None));
    let grouped: Vec<(usize, usize)> = report.levels().map(|(l, s)| (l, s.len())).collect();
    assert_eq!(grouped, vec![(1, 2), (2, 2)]);
    assert_eq!(report.vertex_count(), 5);

    let scan = g.find_cycles().unwrap();
    assert_eq!(scan.cycles.len(), 1);
    assert_eq!(scan.cycles[0].edge, (4, 5));
    assert_eq!(scan.cycles[0].vertices, vec![5, 3, 1, 2, 4]);
}

#[test]
fn root_is_claimed_and_rows_are_processed() {
    let mut g = graph(4, &[(2, 3), (3, 4)]);
    g.build_spanning_tree(3).unwrap();
    assert!(g.is_claimed(3));
    assert!(g.is_row_processed(3));
    assert!(g.is_row_processed(2) && g.is_row_processed(4));
    assert_eq!(g.roots(), &[3]);
    assert!(!g.is_claimed(1) && !g.is_row_processed(1));
}

#[test]
fn disconnected_vertices_stay_unreached() {
    let mut g = graph(6, &[(1, 2), (3, 4)]);
    let report = g.build_spanning_tree(1).unwrap();
    assert_eq!(report.edges().collect::<Vec<_>>(), vec![(1, 2)]);
    for v in [3, 4] {
        assert_eq!(g.level(v), 0);
        assert_eq!(g.father(v), None);
    }
    // (3,4) is outside the tree but closes nothing with it.
    assert!(!g.find_cycles().unwrap().found());
}

#[test]
fn forest_covers_every_component_with_edges() {
    let mut g = graph(8, &[(1, 2), (3, 4), (4, 5), (3, 5), (7, 8)]);
    let forest = g.build_spanning_forest(4).unwrap();
    assert_eq!(forest.roots().collect::<Vec<_>>(), vec![4, 1, 7]);
    assert_eq!(forest.edge_count(), 1 + 2 + 1);
    assert_eq!(g.father(1), Some(1));
    assert_eq!(g.father(2), Some(1));
    assert_eq!(g.level(6), 0, "isolated vertex is not a tree");
    let scan = g.find_cycles().unwrap();
    assert_eq!(scan.cycles.len(), 1);
    let set: BTreeSet<_> = scan.cycles[0].vertices.iter().copied().collect();
    assert_eq!(set, BTreeSet::from([3, 4, 5]));
}

#[test]
fn rebuilding_with_another_root_starts_fresh() {
    let mut g = graph(4, &[(1, 2), (2, 3), (3, 4)]);
    g.build_spanning_tree(1).unwrap();
    assert_eq!(g.level(4), 4);
    let report = g.build_spanning_tree(4).unwrap();
    assert_eq!(report.steps.len(), 3);
    assert_eq!(g.level(4), 1);
    assert_eq!(g.level(1), 4);
    assert_eq!(g.father(1), Some(2));
    assert_eq!(g.roots(), &[4]);
}

#[test]
fn invalid_root_and_missing_tree() {
    let mut g = graph(4, &[(1, 2)]);
    assert_eq!(
        g.build_spanning_tree(0),
        Err(TreeError::InvalidRoot {
            root: 0,
            capacity: 4
        })
    );
    assert_eq!(
        g.build_spanning_forest(5).unwrap_err(),
        TreeError::InvalidRoot {
            root: 5,
            capacity: 4
        }
    );
    assert_eq!(g.find_cycles(), Err(TreeError::NoTree));
}

#[test]
fn isolated_root_yields_single_vertex_tree() {
    let mut g = graph(3, &[(2, 3)]);
    let report = g.build_spanning_tree(1).unwrap();
    assert!(report.steps.is_empty());
    assert_eq!(report.vertex_count(), 1);
    assert!(!g.find_cycles().unwrap().found());
}

#[test]
fn lone_record_without_counterpart_is_still_scanned() {
    let mut g = graph(4, &[(1, 2), (1, 3)]);
    g.index.insert(3, 2).unwrap(); // only the (3,2) half of {2,3}
    g.build_spanning_tree(1).unwrap();
    let scan = g.find_cycles().unwrap();
    assert_eq!(scan.cycles.len(), 1);
    assert_eq!(scan.cycles[0].edge, (3, 2));
    assert_eq!(scan.cycles[0].vertices, vec![2, 1, 3]);
}

#[test]
fn complete_graph_tree_is_a_star_from_root() {
    let n = 9;
    let mut g = Graph::complete(GraphCfg::with_capacity(n)).unwrap();
    let report = g.build_spanning_tree(4).unwrap();
    assert_eq!(report.steps.len(), n - 1);
    assert!(report.steps.iter().all(|s| s.parent == 4 && s.level == 1));
    assert!((1..=n).all(|v| g.level(v) >= 1));
    let tree = undirected_tree_edges(&g);
    assert_eq!(tree.len(), n - 1);
    assert!(is_acyclic(n, &tree));
    let scan = g.find_cycles().unwrap();
    // one cycle per non-tree edge, all triangles through the root
    assert_eq!(scan.cycles.len(), n * (n - 1) / 2 - (n - 1));
    assert!(scan.cycles.iter().all(|c| c.len() == 3 && c.vertices[1] == 4));
}

#[test]
fn seeded_random_graphs_cover_their_component() {
    let mut rng = StdRng::seed_from_u64(7);
    for index in 0..20 {
        let cfg = RandomGraphCfg {
            capacity: 16,
            vertices: 16,
            edge_prob: rng.gen_range(0.05..0.5),
        };
        let mut g = draw_graph(cfg, ReplayToken { seed: 3, index }).unwrap();
        let report = g.build_spanning_tree(1).unwrap();
        let reached: BTreeSet<usize> = (1..=16).filter(|&v| g.level(v) > 0).collect();
        assert_eq!(reached.len(), report.vertex_count());
        for &v in &reached {
            let chain = g.ancestor_chain(v).unwrap();
            assert_eq!(chain.last(), Some(&1));
            assert_eq!(chain.len(), g.level(v));
        }
    }
}

proptest! {
    #[test]
    fn tree_spans_component_and_cycles_match_back_edges(
        raw in proptest::collection::vec((1usize..=10, 1usize..=10), 0..45),
        root in 1usize..=10,
    ) {
        let edges: Vec<_> = raw.into_iter().filter(|(a, b)| a != b).collect();
        let mut g = graph(10, &edges);
        let report = g.build_spanning_tree(root).unwrap();

        let tree = undirected_tree_edges(&g);
        prop_assert_eq!(tree.len(), report.steps.len());
        prop_assert!(is_acyclic(10, &tree));
        // both halves of every tree edge are active
        for &(a, b) in &tree {
            prop_assert!(g.is_tree_edge(a, b) && g.is_tree_edge(b, a));
        }
        // every non-root reached vertex has exactly one father one level up
        for v in 1..=10 {
            match g.father(v) {
                Some(f) if f == v => prop_assert_eq!(v, root),
                Some(f) => prop_assert_eq!(g.level(f) + 1, g.level(v)),
                None => prop_assert_eq!(g.level(v), 0),
            }
        }

        // one cycle per undirected back edge inside the component
        let back_edges = g
            .list_edges()
            .filter(|&(i, j)| i < j && g.level(i) > 0 && !g.is_tree_edge(i, j))
            .count();
        let scan = g.find_cycles().unwrap();
        prop_assert_eq!(scan.cycles.len(), back_edges);
        for c in &scan.cycles {
            let (i, j) = c.edge;
            prop_assert_eq!(c.vertices.first(), Some(&j));
            prop_assert_eq!(c.vertices.last(), Some(&i));
            prop_assert!(c.len() >= 3);
            let distinct: BTreeSet<_> = c.vertices.iter().collect();
            prop_assert_eq!(distinct.len(), c.len());
            // consecutive vertices are tree edges
            for w in c.vertices.windows(2) {
                prop_assert!(g.is_tree_edge(w[0], w[1]));
            }
        }
    }

    #[test]
    fn forest_has_one_tree_edge_less_than_vertices_per_component(
        raw in proptest::collection::vec((1usize..=12, 1usize..=12), 0..20),
    ) {
        let edges: Vec<_> = raw.into_iter().filter(|(a, b)| a != b).collect();
        let mut g = graph(12, &edges);
        let forest = g.build_spanning_forest(1).unwrap();
        let touched = (1..=12).filter(|&v| g.degree(v) > 0 || v == 1).count();
        prop_assert_eq!(forest.edge_count(), touched - forest.trees.len());
        prop_assert!(is_acyclic(12, &undirected_tree_edges(&g)));
        prop_assert!((1..=12).filter(|&v| g.degree(v) > 0).all(|v| g.level(v) > 0));
    }
}
