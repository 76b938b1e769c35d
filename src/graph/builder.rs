// src/graph/builder.rs
//! Graph construction from catalog nodes, declared edges and prerequisites.

use std::collections::{HashMap, HashSet};

use super::relationship::RelationshipGraph;
use crate::catalog::{CourseRecord, EdgeRecord};
use crate::ids::normalize;

/// Builds the undirected relationship graph.
///
/// Adjacency sets do not depend on input order. Endpoints that are not
/// catalog nodes still get an entry so dangling references stay traversable.
#[must_use]
pub fn build(nodes: &[CourseRecord], edges: &[EdgeRecord]) -> RelationshipGraph {
    let mut adjacency: HashMap<String, HashSet<String>> = HashMap::new();

    for node in nodes {
        let id = normalize(&node.id);
        if id.is_empty() {
            continue;
        }
        adjacency.entry(id).or_default();
    }

    for edge in edges {
        if !link(&mut adjacency, &edge.source, &edge.target) {
            log::warn!(
                "ignoring edge with blank endpoint: {:?} -> {:?}",
                edge.source,
                edge.target
            );
        }
    }

    let dangling = dangling_prerequisites(&adjacency, nodes);
    if !dangling.is_empty() {
        log::warn!(
            "{} prerequisite id(s) point outside the catalog",
            dangling.len()
        );
    }
    for node in nodes {
        for prereq in &node.prerequisites {
            link(&mut adjacency, &node.id, prereq);
        }
    }

    let graph = RelationshipGraph {
        adjacency,
        edges: edges.to_vec(),
    };
    log::debug!(
        "relationship graph built: {} ids, {} links",
        graph.node_count(),
        graph.link_count()
    );
    graph
}

/// Distinct canonical prerequisite ids with no node or declared edge.
fn dangling_prerequisites(
    adjacency: &HashMap<String, HashSet<String>>,
    nodes: &[CourseRecord],
) -> HashSet<String> {
    nodes
        .iter()
        .flat_map(|node| &node.prerequisites)
        .map(|id| normalize(id))
        .filter(|id| !id.is_empty() && !adjacency.contains_key(id))
        .collect()
}

/// Adds a bidirectional link. Returns false if either endpoint is blank;
/// the other endpoint still gets an entry.
fn link(adjacency: &mut HashMap<String, HashSet<String>>, a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        for id in [a, b].into_iter().filter(|id| !id.is_empty()) {
            adjacency.entry(id).or_default();
        }
        return false;
    }
    if a == b {
        adjacency.entry(a).or_default();
        return true;
    }
    adjacency.entry(a.clone()).or_default().insert(b.clone());
    adjacency.entry(b).or_default().insert(a);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EdgeKind;

    #[test]
    fn test_every_id_has_entry() {
        let nodes = vec![
            CourseRecord::new("CSC 171"),
            CourseRecord::new("CSC 172").with_prerequisites(["CSC 171", "EQUIV-MATH14X"]),
            CourseRecord::new("WRTG 273"),
        ];
        let edges = vec![EdgeRecord::new("EQUIV-MATH14X", "MATH 141", EdgeKind::Equivalence)];
        let graph = build(&nodes, &edges);

        for id in ["CSC171", "CSC172", "WRTG273", "EQUIV-MATH14X", "MATH141"] {
            assert!(graph.contains(id), "missing entry for {id}");
        }
        assert!(graph.neighbors("WRTG 273").is_empty());
        assert!(graph.are_adjacent("csc 171", "CSC172"));
        assert!(graph.are_adjacent("MATH 141", "equiv-math14x"));
    }

    #[test]
    fn test_order_independent() {
        let nodes = vec![
            CourseRecord::new("A"),
            CourseRecord::new("B").with_prerequisites(["A"]),
            CourseRecord::new("C").with_prerequisites(["A", "B"]),
        ];
        let edges = vec![
            EdgeRecord::new("C", "D", EdgeKind::Prerequisite),
            EdgeRecord::new("D", "A", EdgeKind::Prerequisite),
        ];
        let forward = build(&nodes, &edges);

        let mut rev_nodes = nodes.clone();
        rev_nodes.reverse();
        let mut rev_edges = edges.clone();
        rev_edges.reverse();
        let backward = build(&rev_nodes, &rev_edges);

        assert_eq!(forward.adjacency, backward.adjacency);
    }

    #[test]
    fn test_dangling_counted_once_per_id() {
        let nodes = vec![
            CourseRecord::new("A").with_prerequisites(["GONE 101", "B"]),
            CourseRecord::new("B").with_prerequisites(["gone101", "LOST 1"]),
        ];
        let mut adjacency = HashMap::new();
        for node in &nodes {
            adjacency.insert(normalize(&node.id), HashSet::new());
        }
        let forward = dangling_prerequisites(&adjacency, &nodes);
        let mut reversed = nodes.clone();
        reversed.reverse();
        assert_eq!(forward, dangling_prerequisites(&adjacency, &reversed));
        assert_eq!(forward.len(), 2);
        assert!(forward.contains("GONE101"));
    }

    #[test]
    fn test_blank_endpoints_and_self_loops() {
        let edges = vec![
            EdgeRecord::new("", "A", EdgeKind::Prerequisite),
            EdgeRecord::new("B", "b", EdgeKind::Prerequisite),
        ];
        let graph = build(&[], &edges);
        assert!(!graph.contains(""));
        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
        assert!(graph.neighbors("B").is_empty());
        assert_eq!(graph.link_count(), 0);
    }
}
