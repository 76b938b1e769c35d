// src/catalog/types.rs
//! Dataset records as they arrive from the catalog document.
//!
//! Every field except the ids is optional in the source data. Absent or
//! malformed optional fields deserialize to neutral defaults instead of
//! failing the whole load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One course (or virtual equivalence node) from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Raw display id, e.g. `"CSC 172"`.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub credits: Option<f64>,
    /// Raw prerequisite ids, in catalog order. May reference virtual ids.
    #[serde(default, deserialize_with = "lenient_ids")]
    pub prerequisites: Vec<String>,
    /// Category tag used by similarity scoring.
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CourseRecord {
    /// Minimal record with only an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prereqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prereqs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Cluster tag if present and non-blank.
    #[must_use]
    pub fn cluster_tag(&self) -> Option<&str> {
        non_blank(self.cluster.as_deref())
    }

    /// Department if present and non-blank.
    #[must_use]
    pub fn department_tag(&self) -> Option<&str> {
        non_blank(self.department.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Declared relationship kind. Does not affect distance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EdgeKind {
    #[default]
    Prerequisite,
    Equivalence,
    Other(String),
}

impl EdgeKind {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Prerequisite => "prerequisite",
            Self::Equivalence => "equivalence",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for EdgeKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "prerequisite" | "prereq" => Self::Prerequisite,
            "equivalence" | "equivalent" | "equiv" => Self::Equivalence,
            _ => Self::Other(raw),
        }
    }
}

impl From<EdgeKind> for String {
    fn from(kind: EdgeKind) -> Self {
        kind.label().to_string()
    }
}

/// A declared edge. Treated as undirected by the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: EdgeKind,
}

impl EdgeRecord {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// The raw catalog document: `nodes` plus `edges` (or `links`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub nodes: Vec<CourseRecord>,
    #[serde(default, alias = "links")]
    pub edges: Vec<EdgeRecord>,
}

impl Dataset {
    #[must_use]
    pub fn new(nodes: Vec<CourseRecord>, edges: Vec<EdgeRecord>) -> Self {
        Self { nodes, edges }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Accepts a number or a numeric string; anything else is absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Non-string kinds (null, numbers) fall back to the default kind.
fn lenient_kind<'de, D>(deserializer: D) -> Result<EdgeKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => EdgeKind::from(s),
        _ => EdgeKind::default(),
    })
}

/// Accepts a list (non-string entries dropped), a single string, or null.
fn lenient_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}
