// src/graph/resolver.rs
use serde::Serialize;

use crate::catalog::CatalogIndex;
use crate::graph::relationship::RelationshipGraph;
use crate::ids::normalize;

/// Outcome of resolving a foreign id to a displayable course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "id", rename_all = "snake_case")]
pub enum Resolved {
    /// A visible course; holds its raw catalog id.
    Course(String),
    /// Nothing matched; holds the input unchanged.
    Passthrough(String),
}

impl Resolved {
    /// The id to focus on, resolved or not.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Course(id) | Self::Passthrough(id) => id,
        }
    }

    #[must_use]
    pub fn is_course(&self) -> bool {
        matches!(self, Self::Course(_))
    }

    /// The resolved course id, or `None` for a passthrough.
    #[must_use]
    pub fn into_course(self) -> Option<String> {
        match self {
            Self::Course(id) => Some(id),
            Self::Passthrough(_) => None,
        }
    }

    #[must_use]
    pub fn into_id(self) -> String {
        match self {
            Self::Course(id) | Self::Passthrough(id) => id,
        }
    }
}

/// Maps a possibly virtual or oddly spelled id to a real course id.
///
/// Order: direct canonical match on a visible course, then a declared edge
/// from the input to a visible course (virtual -> real first, then real ->
/// virtual), then passthrough.
#[must_use]
pub fn resolve(catalog: &CatalogIndex, graph: &RelationshipGraph, input: &str) -> Resolved {
    if let Some(course) = catalog.find_visible(input) {
        return Resolved::Course(course.id.clone());
    }

    let wanted = normalize(input);
    if wanted.is_empty() {
        return Resolved::Passthrough(input.to_string());
    }

    if let Some(id) = resolve_via_edges(catalog, graph, &wanted) {
        log::trace!("resolved {input:?} via edge to {id:?}");
        return Resolved::Course(id);
    }

    log::trace!("could not resolve {input:?}; passing through");
    Resolved::Passthrough(input.to_string())
}

fn resolve_via_edges(catalog: &CatalogIndex, graph: &RelationshipGraph, wanted: &str) -> Option<String> {
    let forward = graph
        .edges()
        .iter()
        .filter(|e| normalize(&e.source) == wanted)
        .find_map(|e| visible_id(catalog, &e.target));

    forward.or_else(|| {
        graph
            .edges()
            .iter()
            .filter(|e| normalize(&e.target) == wanted)
            .find_map(|e| visible_id(catalog, &e.source))
    })
}

/// Raw catalog id of a visible course matching `endpoint`.
fn visible_id(catalog: &CatalogIndex, endpoint: &str) -> Option<String> {
    catalog.find_visible(endpoint).map(|rec| rec.id.clone())
}
