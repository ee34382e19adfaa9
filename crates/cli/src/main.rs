use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use spantree::api::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use report::RunReport;

#[derive(Parser)]
#[command(name = "spantree")]
#[command(about = "Spanning trees and fundamental cycles of small undirected graphs")]
struct Cmd {
    /// Vertex ids range over 1..=capacity
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a tree (or forest) for an edge list and report its cycles
    Run {
        /// Undirected edges, e.g. "1-2,2-3,3-1"
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        edges: Option<String>,
        /// CSV file with integer columns `i` and `j`
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 1)]
        root: usize,
        /// Also grow trees for components not reached from the root
        #[arg(long)]
        forest: bool,
        /// Write the JSON report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Same as `run`, on a seeded random graph
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Vertices taking part in edges (defaults to the capacity)
        #[arg(long)]
        vertices: Option<usize>,
        #[arg(long, default_value_t = 0.2)]
        edge_prob: f64,
        #[arg(long, default_value_t = 1)]
        root: usize,
        #[arg(long)]
        forest: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Tree options shared by `run` and `random`.
struct Job {
    capacity: usize,
    root: usize,
    forest: bool,
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let capacity = cmd.capacity;
    match cmd.action {
        Action::Run {
            edges,
            input,
            root,
            forest,
            out,
        } => {
            let (list, source) = match (edges, input) {
                (_, Some(path)) => (input::read_edge_csv(&path)?, path.display().to_string()),
                (Some(s), None) => (input::parse_edge_list(&s)?, s),
                (None, None) => (Vec::new(), String::new()),
            };
            tracing::info!(capacity, root, forest, edges = list.len(), "run");
            let job = Job {
                capacity,
                root,
                forest,
                out,
            };
            let params = json!({"capacity": capacity, "root": root, "forest": forest, "source": source});
            emit(&job, "run", params, &list)
        }
        Action::Random {
            seed,
            index,
            vertices,
            edge_prob,
            root,
            forest,
            out,
        } => {
            let cfg = RandomGraphCfg {
                capacity,
                vertices: vertices.unwrap_or(capacity),
                edge_prob,
            };
            let list = draw_edges(cfg, ReplayToken { seed, index })?;
            tracing::info!(seed, index, edge_prob, edges = list.len(), "random");
            let job = Job {
                capacity,
                root,
                forest,
                out,
            };
            let params = json!({
                "capacity": capacity,
                "root": root,
                "forest": forest,
                "seed": seed,
                "index": index,
                "vertices": cfg.vertices,
                "edge_prob": edge_prob
            });
            emit(&job, "random", params, &list)
        }
        Action::Report => report(capacity),
    }
}

/// Build the graph, grow the tree/forest, scan cycles.
fn analyze(job: &Job, edges: &[(usize, usize)]) -> Result<RunReport> {
    let mut g = Graph::new(GraphCfg::with_capacity(job.capacity)).context("configuring graph")?;
    for &(x, y) in edges {
        match g.insert_edge(x, y) {
            Ok(()) => {}
            Err(EdgeError::AlreadyExists { .. }) => {
                tracing::warn!(x, y, "edge already registered; skipped");
            }
            Err(e) => return Err(e).with_context(|| format!("inserting edge {x}-{y}")),
        }
    }
    let doc = if job.forest {
        let (forest, scan) = forest_and_cycles(&mut g, job.root)?;
        RunReport::forest(&g, &forest, &scan)
    } else {
        let (tree, scan) = tree_and_cycles(&mut g, job.root)?;
        RunReport::tree(&g, &tree, &scan)
    };
    tracing::info!(
        trees = doc.trees.len(),
        cycles = doc.cycles.len(),
        "analysis_done"
    );
    Ok(doc)
}

fn emit(
    job: &Job,
    command: &'static str,
    params: serde_json::Value,
    edges: &[(usize, usize)],
) -> Result<()> {
    let doc = analyze(job, edges)?;
    let text = serde_json::to_string_pretty(&doc)?;
    match &job.out {
        Some(path) => write_report(path, &text, command, params),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn write_report(path: &Path, text: &str, command: &'static str, params: serde_json::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    let prov = provenance::write_sidecar(path, provenance::Payload::new(command, params))?;
    tracing::info!(out = %path.display(), provenance = %prov.display(), "report_written");
    Ok(())
}

fn report(capacity: usize) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": spantree::VERSION,
        "capacity": capacity,
        "max_capacity": MAX_CAPACITY,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
