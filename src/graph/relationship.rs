// src/graph/relationship.rs
//! The course relationship graph and its query interface.

use std::collections::{HashMap, HashSet};

use crate::catalog::{CourseRecord, EdgeRecord};
use crate::graph::distance::{self, DistanceMap};
use crate::ids::normalize;

/// Undirected adjacency over canonical ids.
///
/// Every id named by a node, a declared edge endpoint or a prerequisite has
/// an entry, possibly empty. Built once; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    pub(crate) adjacency: HashMap<String, HashSet<String>>,
    /// Declared edges, kept for resolution lookups.
    pub(crate) edges: Vec<EdgeRecord>,
}

impl RelationshipGraph {
    /// Builds the graph from catalog nodes and declared edges.
    #[must_use]
    pub fn build(nodes: &[CourseRecord], edges: &[EdgeRecord]) -> Self {
        crate::graph::builder::build(nodes, edges)
    }

    /// True if `id` (any spelling) has an adjacency entry.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(&normalize(id))
    }

    /// Canonical ids adjacent to `id`, sorted.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .adjacency
            .get(&normalize(id))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        out.sort();
        out
    }

    /// True if the two ids are directly linked.
    #[must_use]
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(&normalize(a))
            .is_some_and(|set| set.contains(&normalize(b)))
    }

    /// Hop distances from `focus` to everything reachable.
    #[must_use]
    pub fn distances(&self, focus: &str) -> DistanceMap {
        distance::distances(self, focus)
    }

    /// Declared edges in dataset order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// Canonical ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
