use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::VIRTUAL_PREFIX;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Id prefix marking virtual equivalence nodes.
    #[serde(default = "default_virtual_prefix")]
    pub virtual_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { virtual_prefix: default_virtual_prefix() }
    }
}

fn default_virtual_prefix() -> String { VIRTUAL_PREFIX.to_string() }

/// Additive weights of the pairwise similarity heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityWeights {
    #[serde(default = "default_cluster")]
    pub cluster: f64,
    #[serde(default = "default_department")]
    pub department: f64,
    /// Bonus per shared prerequisite...
    #[serde(default = "default_shared_step")]
    pub shared_prereq_step: f64,
    /// ...capped at this total.
    #[serde(default = "default_shared_cap")]
    pub shared_prereq_cap: f64,
    #[serde(default = "default_direct")]
    pub direct_prereq: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            cluster: default_cluster(),
            department: default_department(),
            shared_prereq_step: default_shared_step(),
            shared_prereq_cap: default_shared_cap(),
            direct_prereq: default_direct(),
        }
    }
}

const fn default_cluster() -> f64 { 1.6 }
const fn default_department() -> f64 { 1.0 }
const fn default_shared_step() -> f64 { 0.5 }
const fn default_shared_cap() -> f64 { 1.2 }
const fn default_direct() -> f64 { 2.5 }

/// Radial cloud geometry and node sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width. Center is `(width / 2, height / 2)`.
    pub width: f64,
    pub height: f64,
    /// Radius added per ring.
    pub radius_step: f64,
    /// Rings with more members than this split into two sub-radii.
    pub overflow_threshold: usize,
    /// Gap between the split sub-radii, as a fraction of `radius_step`.
    pub overflow_offset: f64,
    /// Unreachable nodes sit at `max distance + unreachable_padding`.
    pub unreachable_padding: usize,
    pub focus_size: f64,
    pub base_size: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Size lost per hop.
    pub level_decay: f64,
    /// Size gained per similarity point.
    pub similarity_gain: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            radius_step: 110.0,
            overflow_threshold: 12,
            overflow_offset: 0.35,
            unreachable_padding: 2,
            focus_size: 1.6,
            base_size: 1.0,
            min_size: 0.6,
            max_size: 1.3,
            level_decay: 0.12,
            similarity_gain: 0.08,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Two-letter shorthands mapped to catalog prefixes (`CS` -> `CSC`).
    #[serde(default = "default_aliases")]
    pub department_aliases: BTreeMap<String, String>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            department_aliases: default_aliases(),
        }
    }
}

const fn default_max_results() -> usize { 6 }

fn default_aliases() -> BTreeMap<String, String> {
    [("CS".to_string(), "CSC".to_string())].into_iter().collect()
}

/// Top-level `coursecloud.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CloudConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub similarity: SimilarityWeights,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}
