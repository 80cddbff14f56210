//! Side-nav ordering data.
//!
//! The site's sidebar is driven by a YAML data file rather than directory
//! order: each entry names a top-level page and, optionally, the child pages
//! grouped under it. Pages not listed still get built; they just fall back
//! to directory-derived navigation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// One sidebar group: a page and the pages nested under it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavEntry {
    /// Slug of the group's landing page.
    pub page: String,

    /// Slugs of the pages grouped under it, in display order.
    #[serde(default)]
    pub pages: Vec<String>,
}

/// Errors that can occur when loading nav data.
#[derive(Debug, thiserror::Error)]
pub enum NavDataError {
    #[error("failed to read nav data {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid nav data: {0}")]
    InvalidYaml(String),
}

/// Load nav entries from a YAML file.
pub fn load_nav_data(path: &Path) -> Result<Vec<NavEntry>, NavDataError> {
    let content = fs::read_to_string(path).map_err(|e| NavDataError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(|e| NavDataError::InvalidYaml(e.to_string()))
}
