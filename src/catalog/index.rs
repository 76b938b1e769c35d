// src/catalog/index.rs
//! In-memory course lookup, built once from the node list.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::types::CourseRecord;
use crate::ids::{self, normalize};

/// Raw-id and canonical-id views over the catalog records.
///
/// Display reads go through [`CatalogIndex::lookup`] (exact raw id); every
/// equality comparison elsewhere goes through the canonical index.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    records: Vec<CourseRecord>,
    by_raw: HashMap<String, usize>,
    by_canonical: HashMap<String, usize>,
    /// Indices of visible records, sorted by raw id.
    visible: Vec<usize>,
    /// Leading letter runs of visible canonical ids (`CSC`, `MATH`, ...).
    prefixes: BTreeSet<String>,
    virtual_prefix: String,
}

impl CatalogIndex {
    /// Indexes `nodes`. Records with a blank id are skipped; on duplicate
    /// canonical ids the first record wins.
    #[must_use]
    pub fn new(nodes: &[CourseRecord], virtual_prefix: &str) -> Self {
        let mut index = Self {
            virtual_prefix: virtual_prefix.to_string(),
            ..Self::default()
        };

        for node in nodes {
            index.insert(node);
        }

        let mut visible: Vec<usize> = (0..index.records.len())
            .filter(|&i| !ids::is_virtual(&index.records[i].id, virtual_prefix))
            .collect();
        visible.sort_by(|&a, &b| index.records[a].id.cmp(&index.records[b].id));

        index.prefixes = visible
            .iter()
            .map(|&i| department_prefix(&normalize(&index.records[i].id)))
            .filter(|p| !p.is_empty())
            .collect();
        index.visible = visible;

        log::debug!(
            "catalog indexed: {} records, {} visible",
            index.records.len(),
            index.visible.len()
        );
        index
    }

    fn insert(&mut self, node: &CourseRecord) {
        let canonical = normalize(&node.id);
        if canonical.is_empty() {
            log::warn!("skipping catalog node with blank id");
            return;
        }
        if self.by_canonical.contains_key(&canonical) {
            log::warn!("duplicate catalog id {:?}; keeping the first record", node.id);
            return;
        }
        let slot = self.records.len();
        self.records.push(node.clone());
        self.by_raw.insert(node.id.clone(), slot);
        self.by_canonical.insert(canonical, slot);
    }

    /// Exact raw-id lookup, for display.
    #[must_use]
    pub fn lookup(&self, raw_id: &str) -> Option<&CourseRecord> {
        self.by_raw.get(raw_id).map(|&i| &self.records[i])
    }

    /// Lookup by canonical equality (`"csc172"` finds `"CSC 172"`).
    #[must_use]
    pub fn find(&self, any_id: &str) -> Option<&CourseRecord> {
        self.by_canonical
            .get(&normalize(any_id))
            .map(|&i| &self.records[i])
    }

    /// Canonical lookup restricted to visible courses.
    #[must_use]
    pub fn find_visible(&self, any_id: &str) -> Option<&CourseRecord> {
        self.find(any_id).filter(|rec| self.is_visible(&rec.id))
    }

    /// True unless the id is blank or carries the virtual prefix.
    #[must_use]
    pub fn is_visible(&self, raw_id: &str) -> bool {
        !normalize(raw_id).is_empty() && !ids::is_virtual(raw_id, &self.virtual_prefix)
    }

    /// Visible courses, sorted by raw id.
    pub fn visible(&self) -> impl Iterator<Item = &CourseRecord> + '_ {
        self.visible.iter().map(|&i| &self.records[i])
    }

    /// Raw ids of visible courses, sorted.
    pub fn visible_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.visible().map(|rec| rec.id.as_str())
    }

    /// Every indexed record, virtual nodes included, in dataset order.
    #[must_use]
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    /// Department letter prefixes seen among visible canonical ids.
    #[must_use]
    pub fn department_prefixes(&self) -> &BTreeSet<String> {
        &self.prefixes
    }

    #[must_use]
    pub fn virtual_prefix(&self) -> &str {
        &self.virtual_prefix
    }

    /// Visible courses grouped by cluster tag; ids sorted within each group.
    #[must_use]
    pub fn by_cluster(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for rec in self.visible() {
            if let Some(cluster) = rec.cluster_tag() {
                groups
                    .entry(cluster.to_string())
                    .or_default()
                    .push(rec.id.clone());
            }
        }
        groups
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Leading ASCII letters of a canonical id (`CSC172` -> `CSC`).
#[must_use]
pub fn department_prefix(canonical: &str) -> String {
    canonical
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect()
}
