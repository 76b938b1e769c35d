// tests/unit_graph.rs
//! Graph construction and breadth-first distance properties.

use coursecloud_core::catalog::{CourseRecord, EdgeKind, EdgeRecord};
use coursecloud_core::graph::{distances, RelationshipGraph};

fn abc() -> RelationshipGraph {
    let nodes = vec![
        CourseRecord::new("A"),
        CourseRecord::new("B").with_prerequisites(["A"]),
        CourseRecord::new("C").with_prerequisites(["A"]),
    ];
    RelationshipGraph::build(&nodes, &[])
}

#[test]
fn test_scenario_abc_distances() {
    let d = distances(&abc(), "A");
    assert_eq!(d.len(), 3);
    assert_eq!(d.get("A"), Some(0));
    assert_eq!(d.get("B"), Some(1));
    assert_eq!(d.get("C"), Some(1));
}

#[test]
fn test_edges_are_undirected() {
    let edges = vec![
        EdgeRecord::new("X", "Y", EdgeKind::Prerequisite),
        EdgeRecord::new("Y", "Z", EdgeKind::Prerequisite),
    ];
    let graph = RelationshipGraph::build(&[], &edges);
    assert_eq!(distances(&graph, "Z").get("X"), Some(2));
    assert_eq!(distances(&graph, "X").get("Z"), Some(2));
}

#[test]
fn test_focus_spelling_does_not_matter() {
    let graph = abc();
    assert_eq!(distances(&graph, " a ").get("b"), Some(1));
    assert_eq!(distances(&graph, " a ").focus(), "A");
}

#[test]
fn test_bfs_properties_on_grid() {
    // 4x4 grid plus one detached pair.
    let mut edges = Vec::new();
    for r in 0..4 {
        for c in 0..4 {
            let id = format!("N{r}{c}");
            if c < 3 {
                edges.push(EdgeRecord::new(id.clone(), format!("N{r}{}", c + 1), EdgeKind::Prerequisite));
            }
            if r < 3 {
                edges.push(EdgeRecord::new(id.clone(), format!("N{}{c}", r + 1), EdgeKind::Prerequisite));
            }
        }
    }
    edges.push(EdgeRecord::new("P", "Q", EdgeKind::Equivalence));
    let graph = RelationshipGraph::build(&[], &edges);

    for focus in graph.ids() {
        let d = distances(&graph, focus);
        assert_eq!(d.get(focus), Some(0));
        for edge in &edges {
            if let (Some(a), Some(b)) = (d.get(&edge.source), d.get(&edge.target)) {
                assert!(a.abs_diff(b) <= 1);
            }
        }
    }

    let corner = distances(&graph, "N00");
    assert_eq!(corner.get("N33"), Some(6));
    assert_eq!(corner.len(), 16);
    assert!(!corner.contains("P"));
}

#[test]
fn test_dangling_references_traversable() {
    let nodes = vec![CourseRecord::new("CSC 172").with_prerequisites(["CSC 171"])];
    let graph = RelationshipGraph::build(&nodes, &[]);
    assert!(graph.contains("CSC 171"));
    assert_eq!(graph.neighbors("CSC 171"), vec!["CSC172".to_string()]);
}
