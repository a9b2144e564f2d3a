//! Project file loading: grid configurations plus connection rules

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::grid::config::GridConfig;
use crate::grid::stitch::ConnectionRule;
use crate::io::error::{GridError, Result};

/// Declarative project: every grid to generate and every stitching rule
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Grid configurations, generated in order
    pub grids: Vec<GridConfig>,
    /// Connection rules stitched after all grids are generated
    #[serde(default)]
    pub connections: Vec<ConnectionRule>,
}

impl Project {
    /// Load a project from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a file system error when the file cannot be read, or a parse
    /// error when it is not a valid project description.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| GridError::FileSystem {
            path: path.to_path_buf(),
            operation: "read project file",
            source: e,
        })?;

        serde_json::from_str(&text).map_err(|e| GridError::ProjectParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
