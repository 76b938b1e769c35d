//! Course relationship engine.
//!
//! Builds a relationship graph over a course catalog and answers the
//! questions a catalog explorer asks of it: how far is every course from
//! the focused one, how related are two courses, where does each course sit
//! in the radial cloud, which real course does a foreign id stand for, and
//! which ids match a partial query.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit;
pub mod graph;
pub mod ids;
pub mod layout;
pub mod similarity;
pub mod suggest;

pub use catalog::{CatalogIndex, CourseRecord, Dataset, EdgeKind, EdgeRecord};
pub use config::CloudConfig;
pub use engine::{CourseEngine, FocusSession};
pub use graph::{DistanceMap, RelationshipGraph};
pub use layout::LayoutNode;
