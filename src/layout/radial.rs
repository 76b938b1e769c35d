// src/layout/radial.rs
//! Even angular placement of ring members around the canvas center.

use std::f64::consts::TAU;

use crate::config::LayoutConfig;

/// Positions for `count` members of `ring`, in member order.
///
/// Member `i` sits at angle `2π·i/count`. Crowded rings (more than
/// `overflow_threshold` members) alternate between an inner and an outer
/// sub-radius; with an odd count the last member goes outer so it does not
/// sit inner next to member 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ring_positions(ring: u32, count: usize, cfg: &LayoutConfig) -> Vec<(f64, f64)> {
    let (cx, cy) = cfg.center();
    let radius = f64::from(ring) * cfg.radius_step;
    let split = count > cfg.overflow_threshold;
    let half_gap = cfg.overflow_offset * cfg.radius_step / 2.0;

    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            let inner = i % 2 == 0 && !(count % 2 == 1 && i + 1 == count);
            let r = match (split, inner) {
                (false, _) => radius,
                (true, true) => radius - half_gap,
                (true, false) => radius + half_gap,
            };
            (cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect()
}
