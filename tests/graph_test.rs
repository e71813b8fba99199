use std::{collections::HashMap, fs};

use geniusing::{
    cli::top_edges,
    graph::{EdgeError, Row, build_edges, read_rows, write_edges},
    types::Edge,
    utils,
};
use tempfile::TempDir;

fn row(artist: &str, producers: &str) -> Row {
    HashMap::from([
        ("Artist".to_string(), artist.to_string()),
        ("Producers".to_string(), producers.to_string()),
    ])
}

fn edge(source: &str, target: &str, weight: u64) -> Edge {
    Edge {
        source: source.to_string(),
        target: target.to_string(),
        weight,
    }
}

#[test]
fn test_build_edges_counts_rows() {
    let rows = vec![row("A", "P1,P2"), row("A", "P1"), row("B", "P1")];

    let edges = build_edges(&rows, "Artist", "Producers").unwrap();

    assert_eq!(
        edges,
        vec![edge("A", "P1", 2), edge("A", "P2", 1), edge("B", "P1", 1)]
    );
}

#[test]
fn test_build_edges_skips_self_loops_and_blanks() {
    let rows = vec![
        row("A", ""),
        row("A", "A"),
        row("A", ",,A,"),
        row("B", "A,,B"),
    ];

    let edges = build_edges(&rows, "Artist", "Producers").unwrap();

    assert_eq!(edges, vec![edge("B", "A", 1)]);
    assert!(edges.iter().all(|e| e.source != e.target));
}

#[test]
fn test_weight_matches_contributing_rows() {
    let rows = vec![
        row("A", "P1,P2,P1"),
        row("B", "P2"),
        row("A", "P2"),
        row("C", "C,P3"),
        row("A", " P1"),
    ];

    let edges = build_edges(&rows, "Artist", "Producers").unwrap();

    for e in &edges {
        let expected = rows
            .iter()
            .filter(|r| {
                r["Artist"] == e.source && r["Producers"].split(',').any(|t| t == e.target)
            })
            .count() as u64;
        assert_eq!(e.weight, expected, "{} -> {}", e.source, e.target);
    }
    assert!(edges.contains(&edge("A", " P1", 1)));
    assert!(edges.contains(&edge("A", "P1", 1)));
    assert_eq!(edges.len(), 5);
}

#[test]
fn test_missing_column_is_an_error() {
    let rows = vec![row("A", "P1")];

    let err = build_edges(&rows, "Artist", "Producer").unwrap_err();

    assert!(matches!(err, EdgeError::MissingColumn(ref c) if c == "Producer"));
}

#[test]
fn test_edge_list_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("songs.csv");
    fs::write(
        &input,
        "ID,Title,Artist,URL,Producers,Featured Artists,Sampled Artists\n\
         1,One,A,u1,\"P1,P2\",,\n\
         2,Two,A,u2,P1,B,\n\
         3,Three,B,u3,P1,,A\n",
    )
    .unwrap();

    let rows = read_rows(&input).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["Producers"], "P1,P2");

    let edges = build_edges(&rows, "Artist", "Producers").unwrap();
    let output = dir
        .path()
        .join(utils::edge_file_name("Artist", "Producers"));
    write_edges(&output, "Artist", "Producers", &edges).unwrap();

    assert!(output.ends_with("artist-producers.csv"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Artist,Producers,weight\nA,P1,2\nA,P2,1\nB,P1,1\n"
    );
}

#[test]
fn test_read_rows_missing_file() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(
        read_rows(&dir.path().join("nope.csv")),
        Err(EdgeError::Io { .. })
    ));
}

#[test]
fn test_top_edges_orders_by_weight() {
    let edges = vec![
        edge("A", "P1", 1),
        edge("A", "P2", 3),
        edge("B", "P1", 1),
        edge("C", "P4", 2),
    ];

    let top = top_edges(&edges, 3);

    let names: Vec<(&str, u64)> = top.iter().map(|r| (r.target.as_str(), r.weight)).collect();
    assert_eq!(names, vec![("P2", 3), ("P4", 2), ("P1", 1)]);
    assert_eq!(top[2].source, "A");
}
