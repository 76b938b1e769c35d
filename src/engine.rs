// src/engine.rs
//! The immutable engine context and the per-view focus session.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::{CatalogIndex, CourseRecord, Dataset};
use crate::config::CloudConfig;
use crate::error::Result;
use crate::graph::{self, equivalence, DistanceMap, RelationshipGraph, Resolved};
use crate::ids::normalize;
use crate::layout::{self, LayoutContext, LayoutNode};
use crate::similarity;
use crate::suggest;

/// Catalog index, relationship graph and configuration, built once.
///
/// Read-only after construction; every query borrows it.
#[derive(Debug, Clone)]
pub struct CourseEngine {
    config: CloudConfig,
    catalog: CatalogIndex,
    graph: RelationshipGraph,
}

impl CourseEngine {
    /// Builds the engine with default configuration.
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        Self::with_config(dataset, CloudConfig::default())
    }

    /// Builds the engine with `config` as given. Use
    /// [`CourseEngine::try_with_config`] for configuration from outside.
    #[must_use]
    pub fn with_config(dataset: &Dataset, config: CloudConfig) -> Self {
        let catalog = CatalogIndex::new(&dataset.nodes, &config.catalog.virtual_prefix);
        let graph = RelationshipGraph::build(&dataset.nodes, &dataset.edges);
        Self {
            config,
            catalog,
            graph,
        }
    }

    /// Validates `config`, then builds the engine.
    ///
    /// # Errors
    /// Returns error if the configuration fails [`CloudConfig::validate`].
    pub fn try_with_config(dataset: &Dataset, config: CloudConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(dataset, config))
    }

    /// Loads the dataset at `path` and builds the engine.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the dataset cannot be
    /// read or parsed.
    pub fn load(path: &Path, config: CloudConfig) -> Result<Self> {
        config.validate()?;
        let dataset = Dataset::load(path)?;
        Ok(Self::with_config(&dataset, config))
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    #[must_use]
    pub fn graph(&self) -> &RelationshipGraph {
        &self.graph
    }

    #[must_use]
    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Exact raw-id record lookup.
    #[must_use]
    pub fn lookup(&self, raw_id: &str) -> Option<&CourseRecord> {
        self.catalog.lookup(raw_id)
    }

    /// Hop distances from `focus` (no resolution applied).
    #[must_use]
    pub fn distances(&self, focus: &str) -> DistanceMap {
        self.graph.distances(focus)
    }

    /// Similarity of `other` to `focus`, both looked up canonically.
    #[must_use]
    pub fn similarity(&self, focus: &str, other: &str) -> f64 {
        similarity::score(
            self.catalog.find(focus),
            self.catalog.find(other),
            &self.config.similarity,
        )
    }

    /// Radial layout around `focus`; see [`layout::compute`].
    #[must_use]
    pub fn layout(&self, focus: &str) -> Vec<LayoutNode<'_>> {
        layout::compute(&self.layout_context(), focus)
    }

    fn layout_context(&self) -> LayoutContext<'_> {
        LayoutContext {
            catalog: &self.catalog,
            graph: &self.graph,
            weights: &self.config.similarity,
            config: &self.config.layout,
        }
    }

    /// Maps a foreign or virtual id to a visible course, else passes it through.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Resolved {
        graph::resolve(&self.catalog, &self.graph, input)
    }

    /// Type-ahead matches for `query`.
    #[must_use]
    pub fn suggest(&self, query: &str, max_results: usize) -> Vec<String> {
        suggest::suggest(
            &self.catalog,
            query,
            max_results,
            &self.config.suggest.department_aliases,
        )
    }

    /// Visible members of a virtual equivalence group.
    #[must_use]
    pub fn equivalence_members(&self, virtual_id: &str) -> Vec<String> {
        equivalence::members(&self.catalog, &self.graph, virtual_id)
    }

    /// Resolves a planner selection for hand-off to the scheduling service.
    ///
    /// Canonical duplicates are dropped; first occurrence order is kept.
    #[must_use]
    pub fn planner_ids<S: AsRef<str>>(&self, selected: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        selected
            .iter()
            .map(|id| self.resolve(id.as_ref()).into_id())
            .filter(|id| {
                let key = normalize(id);
                !key.is_empty() && seen.insert(key)
            })
            .collect()
    }
}

/// Memoizes the layout of the most recent focus.
///
/// A new focus replaces the previous result outright; older layouts are
/// never kept.
pub struct FocusSession<'e> {
    engine: &'e CourseEngine,
    current: Option<(String, Vec<LayoutNode<'e>>)>,
}

impl<'e> FocusSession<'e> {
    #[must_use]
    pub fn new(engine: &'e CourseEngine) -> Self {
        Self {
            engine,
            current: None,
        }
    }

    /// Layout for `focus`, recomputed only when the canonical focus changes.
    pub fn focus(&mut self, focus: &str) -> &[LayoutNode<'e>] {
        let key = normalize(focus);
        let stale = self.current.as_ref().map_or(true, |(k, _)| *k != key);
        if stale {
            log::debug!("focus changed to {focus:?}; recomputing layout");
            let nodes = self.engine.layout(focus);
            self.current = Some((key, nodes));
        }
        match &self.current {
            Some((_, nodes)) => nodes,
            None => &[],
        }
    }

    /// Canonical id of the memoized focus.
    #[must_use]
    pub fn current_focus(&self) -> Option<&str> {
        self.current.as_ref().map(|(k, _)| k.as_str())
    }

    /// Drops the memoized layout.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EdgeKind, EdgeRecord};

    fn engine() -> CourseEngine {
        CourseEngine::new(&Dataset::new(
            vec![
                CourseRecord::new("CSC 171"),
                CourseRecord::new("CSC 172").with_prerequisites(["CSC 171", "EQUIV-MATH14X"]),
                CourseRecord::new("MATH 141"),
                CourseRecord::new("EQUIV-MATH14X"),
            ],
            vec![EdgeRecord::new("EQUIV-MATH14X", "MATH 141", EdgeKind::Equivalence)],
        ))
    }

    #[test]
    fn test_session_memoizes_last_focus() {
        let e = engine();
        let mut session = FocusSession::new(&e);
        let first = session.focus("CSC 172").to_vec();
        assert_eq!(session.current_focus(), Some("CSC172"));
        let again = session.focus("csc172").to_vec();
        assert_eq!(first, again);

        let other = session.focus("MATH 141").to_vec();
        assert_eq!(other[0].id, "MATH 141");
        assert_eq!(session.current_focus(), Some("MATH141"));

        session.clear();
        assert_eq!(session.current_focus(), None);
    }

    #[test]
    fn test_planner_ids_resolve_and_dedupe() {
        let e = engine();
        let ids = e.planner_ids(&["EQUIV-MATH14X", "csc 172", "MATH 141", "CSC172", "", "PHIL 101"]);
        assert_eq!(ids, vec!["MATH 141", "CSC 172", "PHIL 101"]);
    }

    #[test]
    fn test_similarity_by_id() {
        let e = engine();
        assert!((e.similarity("CSC 171", "csc 172") - 2.5).abs() < 1e-9);
        assert!(e.similarity("CSC 171", "NOPE").abs() < 1e-9);
    }
}
