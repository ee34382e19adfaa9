//! Build a small graph, grow its spanning tree from vertex 1 and print the
//! cycles closed by the remaining edges.

use spantree::api::*;

fn main() -> Result<(), GraphError> {
    let mut g = Graph::from_edges(
        GraphCfg::default(),
        &[(1, 2), (2, 3), (1, 3), (3, 4), (4, 5), (5, 3)],
    )?;
    let (tree, scan) = tree_and_cycles(&mut g, 1)?;
    println!("Root: {}", tree.root);
    for (level, steps) in tree.levels() {
        let line: Vec<String> = steps
            .iter()
            .map(|s| format!("{{{}}}({},{})/({},{})", s.child, s.parent, s.child, s.child, s.parent))
            .collect();
        println!("Level {level}: {}", line.join(", "));
    }
    for c in &scan.cycles {
        println!("{:?}: cycle {:?}", c.edge, c.vertices);
    }
    if !scan.found() {
        println!("Tree has no cycles.");
    }
    Ok(())
}
