// src/layout/rings.rs
//! Ring assignment and visual sizing.

use crate::config::LayoutConfig;

/// Continuous ring position before rounding: `level + 0.5 - sim`, floored at 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn effective_ring(graph_level: usize, similarity: f64) -> f64 {
    (graph_level as f64 + 0.5 - similarity).max(0.0)
}

/// Integer ring for a non-focus node. Never below 1; ring 0 is the focus.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn assign(graph_level: usize, similarity: f64) -> u32 {
    let effective = effective_ring(graph_level, similarity);
    if similarity > graph_level as f64 + 0.5 {
        log::trace!("similarity {similarity:.2} saturates ring at level {graph_level}");
    }
    (effective.round().min(f64::from(u32::MAX)) as u32).max(1)
}

/// Visual size: shrinks with distance, grows with similarity, clamped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn node_size(graph_level: usize, similarity: f64, cfg: &LayoutConfig) -> f64 {
    let raw = cfg.base_size - cfg.level_decay * graph_level as f64 + cfg.similarity_gain * similarity;
    raw.max(cfg.min_size).min(cfg.max_size)
}
