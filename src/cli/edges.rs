use std::path::Path;

use tabled::Table;

use crate::{
    error, graph, success,
    types::{Edge, EdgeTableRow},
    utils,
};

pub fn edges(
    source_column: &str,
    target_column: &str,
    input: &Path,
    output_dir: &Path,
    top: usize,
) {
    let rows = match graph::read_rows(input) {
        Ok(rows) => rows,
        Err(e) => error!("Cannot read {}. Err: {}", input.display(), e),
    };

    let edges = match graph::build_edges(&rows, source_column, target_column) {
        Ok(edges) => edges,
        Err(e) => error!("Cannot build edges. Err: {}", e),
    };

    let output = output_dir.join(utils::edge_file_name(source_column, target_column));
    if let Err(e) = graph::write_edges(&output, source_column, target_column, &edges) {
        error!("Cannot write edge list. Err: {}", e);
    }

    success!(
        "Wrote {} edges from {} rows to {}",
        edges.len(),
        rows.len(),
        output.display()
    );

    if top > 0 && !edges.is_empty() {
        println!("{}", Table::new(top_edges(&edges, top)));
    }
}

/// The `n` heaviest edges, ties kept in output order.
pub fn top_edges(edges: &[Edge], n: usize) -> Vec<EdgeTableRow> {
    let mut sorted: Vec<&Edge> = edges.iter().collect();
    sorted.sort_by(|a, b| b.weight.cmp(&a.weight));

    sorted
        .into_iter()
        .take(n)
        .map(|e| EdgeTableRow {
            source: e.source.clone(),
            target: e.target.clone(),
            weight: e.weight,
        })
        .collect()
}
