// src/graph/mod.rs
//! Relationship graph: construction, traversal and id resolution.

pub mod builder;
pub mod distance;
pub mod equivalence;
pub mod relationship;
pub mod resolver;

pub use distance::{distances, DistanceMap};
pub use relationship::RelationshipGraph;
pub use resolver::{resolve, Resolved};
