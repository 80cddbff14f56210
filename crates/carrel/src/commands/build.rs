//! Static site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use carrel_site::{BuildConfig, SiteBuilder};
use serde::Deserialize;

/// Configuration file structure (carrel.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    docs: DocsConfig,
    #[serde(default)]
    data: DataConfig,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize, Default)]
struct DocsConfig {
    #[serde(default = "default_docs_dir")]
    dir: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Paths to extra CSS stylesheets to include
    styles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct DataConfig {
    /// Side-nav ordering data file
    nav: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct BuildSettings {
    #[serde(default = "default_minify")]
    minify: bool,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_title() -> String {
    "Design System".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from carrel.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building documentation site...");

    let file_config = load_config(config_path)?;

    let config = BuildConfig {
        docs_dir: PathBuf::from(&file_config.docs.dir),
        nav_data: file_config.data.nav.map(PathBuf::from),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.docs.output)),
        minify: minify.unwrap_or(file_config.build.minify),
        base_url: file_config.docs.base_url,
        title: file_config.docs.title,
        styles: file_config.docs.styles.unwrap_or_default(),
    };

    let result = SiteBuilder::new(config).build().await?;

    tracing::info!(
        "Built {} pages with {} component demos in {}ms",
        result.pages,
        result.demos,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
