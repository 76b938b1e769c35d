// src/catalog/mod.rs
pub mod index;
pub mod loader;
pub mod types;

pub use index::CatalogIndex;
pub use types::{CourseRecord, Dataset, EdgeKind, EdgeRecord};
