// src/graph/distance.rs
//! Hop distance from a focus course via breadth-first search.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use super::relationship::RelationshipGraph;
use crate::ids::normalize;

/// Minimum hop counts from one focus to every reachable canonical id.
///
/// Unreachable ids are absent; absence is the "unreachable" signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistanceMap {
    focus: String,
    hops: HashMap<String, usize>,
}

impl DistanceMap {
    /// Canonical focus the map was computed from.
    #[must_use]
    pub fn focus(&self) -> &str {
        &self.focus
    }

    /// Hop count for `id` (any spelling), or `None` if unreachable.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<usize> {
        self.hops.get(&normalize(id)).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.hops.contains_key(&normalize(id))
    }

    /// Largest hop count observed; 0 when empty.
    #[must_use]
    pub fn max_hops(&self) -> usize {
        self.hops.values().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.hops.iter().map(|(id, &d)| (id.as_str(), d))
    }

    /// Entries sorted by distance, then id.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Breadth-first search from `normalize(focus)`.
///
/// Returns an empty map if the focus has no adjacency entry.
#[must_use]
pub fn distances(graph: &RelationshipGraph, focus: &str) -> DistanceMap {
    let start = normalize(focus);
    let mut map = DistanceMap {
        focus: start.clone(),
        hops: HashMap::new(),
    };
    if !graph.adjacency.contains_key(&start) {
        log::trace!("distance focus {focus:?} not in graph");
        return map;
    }

    let mut queue = VecDeque::new();
    map.hops.insert(start.clone(), 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let depth = map.hops.get(&current).copied().unwrap_or(0);
        let Some(neighbors) = graph.adjacency.get(&current) else {
            continue;
        };
        for next in neighbors {
            if !map.hops.contains_key(next) {
                map.hops.insert(next.clone(), depth + 1);
                queue.push_back(next.clone());
            }
        }
    }

    log::trace!("distances from {:?}: {} reachable", map.focus, map.hops.len());
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CourseRecord, EdgeKind, EdgeRecord};

    fn chain() -> RelationshipGraph {
        let nodes = vec![
            CourseRecord::new("A"),
            CourseRecord::new("B").with_prerequisites(["A"]),
            CourseRecord::new("C").with_prerequisites(["B"]),
            CourseRecord::new("D").with_prerequisites(["C", "A"]),
            CourseRecord::new("ISLAND"),
        ];
        RelationshipGraph::build(&nodes, &[])
    }

    #[test]
    fn test_minimum_hops() {
        let d = distances(&chain(), "a");
        assert_eq!(d.get("A"), Some(0));
        assert_eq!(d.get("B"), Some(1));
        assert_eq!(d.get("D"), Some(1));
        assert_eq!(d.get("C"), Some(2));
        assert_eq!(d.get("ISLAND"), None);
        assert_eq!(d.len(), 4);
        assert_eq!(d.max_hops(), 2);
    }

    #[test]
    fn test_unknown_focus_is_empty() {
        let d = distances(&chain(), "NOPE 101");
        assert!(d.is_empty());
        assert_eq!(d.max_hops(), 0);
        assert!(distances(&chain(), "").is_empty());
    }

    #[test]
    fn test_traverses_virtual_nodes() {
        let nodes = vec![
            CourseRecord::new("MATH 141"),
            CourseRecord::new("MATH 161"),
            CourseRecord::new("CSC 172").with_prerequisites(["EQUIV-MATH14X"]),
        ];
        let edges = vec![
            EdgeRecord::new("EQUIV-MATH14X", "MATH 141", EdgeKind::Equivalence),
            EdgeRecord::new("MATH 161", "EQUIV-MATH14X", EdgeKind::Equivalence),
        ];
        let graph = RelationshipGraph::build(&nodes, &edges);
        let d = distances(&graph, "MATH 141");
        assert_eq!(d.get("EQUIV-MATH14X"), Some(1));
        assert_eq!(d.get("CSC 172"), Some(2));
        assert_eq!(d.get("MATH 161"), Some(2));
    }

    #[test]
    fn test_adjacent_ids_differ_by_at_most_one() {
        let graph = chain();
        for focus in graph.ids() {
            let d = distances(&graph, focus);
            assert_eq!(d.get(focus), Some(0));
            for (id, set) in &graph.adjacency {
                for other in set {
                    if let (Some(a), Some(b)) = (d.get(id), d.get(other)) {
                        assert!(a.abs_diff(b) <= 1, "{id} / {other} from {focus}");
                    }
                }
            }
        }
    }
}
