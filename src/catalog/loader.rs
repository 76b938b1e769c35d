// src/catalog/loader.rs
//! Reading the catalog document from disk or memory.

use std::fs;
use std::path::Path;

use super::types::Dataset;
use crate::error::{CloudError, Result};

impl Dataset {
    /// Parses a catalog document (`{"nodes": [...], "edges"|"links": [...]}`).
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON of that shape.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let data: Dataset = serde_json::from_str(content)?;
        log::debug!(
            "dataset parsed: {} nodes, {} edges",
            data.nodes.len(),
            data.edges.len()
        );
        Ok(data)
    }

    /// Loads a catalog document from `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CloudError::io(e, path))?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let data = Dataset::from_json_str("{}").unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = Dataset::from_json_str("{nodes: ").unwrap_err();
        assert!(matches!(err, CloudError::Json(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Dataset::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
