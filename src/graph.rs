//! Weighted edge lists derived from the songs CSV.
//!
//! Every row links the value of a source column to each comma-separated
//! value of a target column. Links are collected in a directed graph whose
//! edge weights count the rows that produced them, then written out as a
//! three-column CSV for Gephi, Cytoscape and similar tools.

use std::{
    collections::{HashMap, HashSet},
    fs::File,
    io,
    path::{Path, PathBuf},
};

use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;

use crate::types::Edge;

/// One CSV row keyed by header name.
pub type Row = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("column {0:?} not found in input")]
    MissingColumn(String),
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Directed multigraph collapsed into weighted edges, nodes keyed by name.
#[derive(Default)]
pub struct EdgeGraph {
    graph: DiGraph<String, u64>,
    nodes: HashMap<String, NodeIndex>,
}

impl EdgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `source -> target`.
    ///
    /// Self-loops and empty targets are ignored. Returns whether an
    /// occurrence was counted.
    pub fn add(&mut self, source: &str, target: &str) -> bool {
        if target.is_empty() || source == target {
            return false;
        }

        let from = self.node(source);
        let to = self.node(target);
        match self.graph.find_edge(from, to) {
            Some(edge) => self.graph[edge] += 1,
            None => {
                self.graph.add_edge(from, to, 1);
            }
        }
        true
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.nodes.get(name) {
            return *idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), idx);
        idx
    }

    /// Edges in the order they were first seen.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_indices()
            .filter_map(|e| {
                let (from, to) = self.graph.edge_endpoints(e)?;
                Some(Edge {
                    source: self.graph[from].clone(),
                    target: self.graph[to].clone(),
                    weight: self.graph[e],
                })
            })
            .collect()
    }
}

/// Aggregates `rows` into weighted `source_column -> target_column` edges.
///
/// The target cell is split on `,`. Each distinct non-empty target that
/// differs from the source adds 1 to that pair's weight, so a weight is the
/// number of rows linking the pair. Values are not trimmed.
///
/// # Errors
///
/// Returns [`EdgeError::MissingColumn`] if a row lacks either column.
pub fn build_edges<'a, I>(
    rows: I,
    source_column: &str,
    target_column: &str,
) -> Result<Vec<Edge>, EdgeError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut graph = EdgeGraph::new();

    for row in rows {
        let source = row
            .get(source_column)
            .ok_or_else(|| EdgeError::MissingColumn(source_column.to_string()))?;
        let targets = row
            .get(target_column)
            .ok_or_else(|| EdgeError::MissingColumn(target_column.to_string()))?;

        let mut seen = HashSet::new();
        for target in targets.split(',') {
            if seen.insert(target) {
                graph.add(source, target);
            }
        }
    }

    Ok(graph.edges())
}

/// Reads a headed CSV file fully into memory.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, EdgeError> {
    let file = File::open(path).map_err(|source| EdgeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize::<Row>() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Writes `edges` under the header `source_column,target_column,weight`.
pub fn write_edges(
    path: &Path,
    source_column: &str,
    target_column: &str,
    edges: &[Edge],
) -> Result<(), EdgeError> {
    let io_err = |source: io::Error| EdgeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record([source_column, target_column, "weight"])?;
    for edge in edges {
        let weight = edge.weight.to_string();
        writer.write_record([edge.source.as_str(), edge.target.as_str(), weight.as_str()])?;
    }
    writer.flush().map_err(io_err)
}
