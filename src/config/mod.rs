pub mod types;

pub use self::types::{CatalogConfig, CloudConfig, LayoutConfig, SimilarityWeights, SuggestConfig};

use crate::error::{CloudError, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "coursecloud.toml";

impl CloudConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or a value has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path` (or `coursecloud.toml`). A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        if !path.exists() {
            log::debug!("no config at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| CloudError::io(e, path))?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the layout cannot work with.
    ///
    /// # Errors
    /// Returns error on non-positive geometry, an inverted size range, a
    /// focus smaller than its satellites, or an overflow offset that would
    /// push inner sub-radii through the center.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if layout.radius_step <= 0.0 || layout.width <= 0.0 || layout.height <= 0.0 {
            return Err(CloudError::Other(
                "layout width, height and radius_step must be positive".into(),
            ));
        }
        if layout.min_size > layout.max_size {
            return Err(CloudError::Other(format!(
                "layout min_size ({}) exceeds max_size ({})",
                layout.min_size, layout.max_size
            )));
        }
        if layout.focus_size < layout.max_size {
            return Err(CloudError::Other(format!(
                "layout focus_size ({}) is smaller than max_size ({})",
                layout.focus_size, layout.max_size
            )));
        }
        // Inner sub-radius of ring 1 is radius_step * (1 - overflow_offset / 2).
        if !(0.0..2.0).contains(&layout.overflow_offset) {
            return Err(CloudError::Other(format!(
                "layout overflow_offset ({}) must be in [0, 2)",
                layout.overflow_offset
            )));
        }
        Ok(())
    }

    /// Serializes the configuration as pretty TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CloudError::Other(e.to_string()))
    }
}
