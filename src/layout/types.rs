// src/layout/types.rs
use serde::Serialize;

use crate::catalog::CourseRecord;

/// One positioned course in the radial cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode<'a> {
    /// Raw display id.
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Ring index; 0 only for the focus.
    pub ring: u32,
    /// Visual weight.
    pub size: f64,
    /// BFS hops from the focus; `None` if unreachable.
    pub graph_level: Option<usize>,
    pub similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<&'a CourseRecord>,
}

impl LayoutNode<'_> {
    #[must_use]
    pub fn is_focus(&self) -> bool {
        self.ring == 0
    }
}
