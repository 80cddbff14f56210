//! Frontmatter extraction and parsing.

use serde::Deserialize;

/// Lifecycle status of a documented component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Experimental,
    Beta,
    #[default]
    Stable,
    Deprecated,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Experimental => "experimental",
            Status::Beta => "beta",
            Status::Stable => "stable",
            Status::Deprecated => "deprecated",
        }
    }
}

/// Parsed frontmatter from a documentation page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Page title (required)
    pub title: String,

    /// Page description, used for search and meta tags
    #[serde(default)]
    pub description: Option<String>,

    /// Lifecycle status shown in the page header
    #[serde(default)]
    pub status: Status,

    /// Order in navigation (lower = first)
    #[serde(default)]
    pub order: Option<i32>,

    /// Whether to show in navigation
    #[serde(default = "default_true")]
    pub nav: bool,

    /// Custom slug override
    #[serde(default)]
    pub slug: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            status: Status::Stable,
            order: None,
            nav: true,
            slug: None,
        }
    }
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("unclosed frontmatter block, missing closing ---")]
    Unclosed,

    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

/// Extract the leading `---` YAML block from a page.
///
/// Returns the parsed frontmatter (if any) and the content after it.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter =
        serde_yaml::from_str(yaml).map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}
