// src/graph/equivalence.rs
//! Membership of virtual equivalence groups.

use crate::catalog::{CatalogIndex, EdgeKind, EdgeRecord};
use crate::graph::relationship::RelationshipGraph;
use crate::ids::{self, normalize};

/// Raw ids of the visible courses in a virtual group, sorted.
///
/// Members come from declared edges touching the virtual node. When any of
/// those edges is typed `equivalence`, only equivalence edges count.
/// Courses linked only through their prerequisite lists are dependents, not
/// members. Empty for ids that are not virtual.
#[must_use]
pub fn members(catalog: &CatalogIndex, graph: &RelationshipGraph, virtual_id: &str) -> Vec<String> {
    if !ids::is_virtual(virtual_id, catalog.virtual_prefix()) {
        return Vec::new();
    }
    let wanted = normalize(virtual_id);

    let touching: Vec<(&EdgeRecord, &str)> = graph
        .edges()
        .iter()
        .filter_map(|e| other_end(e, &wanted).map(|other| (e, other)))
        .collect();
    let typed = touching.iter().any(|(e, _)| e.kind == EdgeKind::Equivalence);

    let mut out: Vec<String> = touching
        .into_iter()
        .filter(|(e, _)| !typed || e.kind == EdgeKind::Equivalence)
        .filter_map(|(_, other)| catalog.find_visible(other))
        .map(|rec| rec.id.clone())
        .collect();
    out.sort();
    out.dedup();
    out
}

fn other_end<'e>(edge: &'e EdgeRecord, wanted: &str) -> Option<&'e str> {
    if normalize(&edge.source) == wanted {
        Some(edge.target.as_str())
    } else if normalize(&edge.target) == wanted {
        Some(edge.source.as_str())
    } else {
        None
    }
}
