// src/layout/mod.rs
//! Radial "cloud" layout around a focus course.
//!
//! Graph distance pushes a course outward; similarity to the focus pulls it
//! back in. Ring 0 belongs to the focus alone.

pub mod radial;
pub mod rings;
pub mod types;

pub use types::LayoutNode;

use std::collections::BTreeMap;

use crate::catalog::{CatalogIndex, CourseRecord};
use crate::config::{LayoutConfig, SimilarityWeights};
use crate::graph::{self, DistanceMap, RelationshipGraph};
use crate::ids::{self, normalize};
use crate::similarity;

/// Everything the layout reads. Borrowed from the engine.
pub struct LayoutContext<'a> {
    pub catalog: &'a CatalogIndex,
    pub graph: &'a RelationshipGraph,
    pub weights: &'a SimilarityWeights,
    pub config: &'a LayoutConfig,
}

struct Satellite<'a> {
    record: &'a CourseRecord,
    level: Option<usize>,
    similarity: f64,
    size: f64,
}

/// Lays out every visible course around `focus`.
///
/// Output order: the focus (if any), then rings ascending, raw id ascending
/// within a ring. Deterministic for a fixed dataset and focus.
#[must_use]
pub fn compute<'a>(ctx: &LayoutContext<'a>, focus: &str) -> Vec<LayoutNode<'a>> {
    if ctx.catalog.is_empty() && ctx.graph.node_count() == 0 {
        return Vec::new();
    }

    let resolved = graph::resolve(ctx.catalog, ctx.graph, focus).into_id();
    let focus_key = normalize(&resolved);
    let has_focus = !focus_key.is_empty()
        && (ctx.catalog.find_visible(&resolved).is_some() || ctx.graph.contains(&resolved));

    let distances = if has_focus {
        ctx.graph.distances(&resolved)
    } else {
        DistanceMap::default()
    };
    // An unresolved virtual focus still seeds the BFS but is never drawn.
    let centered = has_focus && !ids::is_virtual(&resolved, ctx.catalog.virtual_prefix());
    let focus_record = if centered { ctx.catalog.find(&resolved) } else { None };
    let fallback = distances.max_hops() + ctx.config.unreachable_padding;

    let mut by_ring: BTreeMap<u32, Vec<Satellite<'a>>> = BTreeMap::new();
    for record in ctx.catalog.visible() {
        if normalize(&record.id) == focus_key {
            continue;
        }
        let level = distances.get(&record.id);
        let graph_level = level.unwrap_or(fallback);
        let similarity = similarity::score(focus_record, Some(record), ctx.weights);
        let ring = rings::assign(graph_level, similarity);
        by_ring.entry(ring).or_default().push(Satellite {
            record,
            level,
            similarity,
            size: rings::node_size(graph_level, similarity, ctx.config),
        });
    }

    let mut nodes = Vec::with_capacity(ctx.catalog.len() + 1);
    if centered {
        nodes.push(focus_node(ctx.config, &resolved, focus_record));
    }
    for (ring, members) in by_ring {
        let positions = radial::ring_positions(ring, members.len(), ctx.config);
        for (sat, (x, y)) in members.into_iter().zip(positions) {
            nodes.push(LayoutNode {
                id: sat.record.id.clone(),
                x,
                y,
                ring,
                size: sat.size,
                graph_level: sat.level,
                similarity: sat.similarity,
                course: Some(sat.record),
            });
        }
    }

    log::debug!(
        "layout for {focus:?} (resolved {resolved:?}): {} nodes, {} reachable",
        nodes.len(),
        distances.len()
    );
    nodes
}

fn focus_node<'a>(cfg: &LayoutConfig, resolved: &str, record: Option<&'a CourseRecord>) -> LayoutNode<'a> {
    let (x, y) = cfg.center();
    LayoutNode {
        id: record.map_or_else(|| resolved.to_string(), |r| r.id.clone()),
        x,
        y,
        ring: 0,
        size: cfg.focus_size,
        graph_level: Some(0),
        similarity: 0.0,
        course: record,
    }
}
