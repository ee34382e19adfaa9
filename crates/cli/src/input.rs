//! Edge-list inputs: inline `i-j` lists and `i,j` CSV files.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

/// Parse `"1-2, 2-3,3-1"` into undirected pairs. Empty items are ignored.
pub fn parse_edge_list(s: &str) -> Result<Vec<(usize, usize)>> {
    s.split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(parse_pair)
        .collect()
}

fn parse_pair(tok: &str) -> Result<(usize, usize)> {
    let (a, b) = tok
        .split_once('-')
        .with_context(|| format!("edge `{tok}` is not of the form i-j"))?;
    let i = a
        .trim()
        .parse::<usize>()
        .with_context(|| format!("bad vertex `{}` in edge `{tok}`", a.trim()))?;
    let j = b
        .trim()
        .parse::<usize>()
        .with_context(|| format!("bad vertex `{}` in edge `{tok}`", b.trim()))?;
    Ok((i, j))
}

/// Read a CSV with integer columns `i` and `j` (header required).
pub fn read_edge_csv(path: &Path) -> Result<Vec<(usize, usize)>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "edge_csv_shape");
    let i = column_ids(&df, "i")?;
    let j = column_ids(&df, "j")?;
    Ok(i.into_iter().zip(j).collect())
}

fn column_ids(df: &DataFrame, name: &str) -> Result<Vec<usize>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Int64)
        .with_context(|| format!("column `{name}` is not integer"))?;
    col.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            let v = v.with_context(|| format!("empty `{name}` at row {row}"))?;
            usize::try_from(v).with_context(|| format!("negative id {v} in `{name}` at row {row}"))
        })
        .collect()
}
