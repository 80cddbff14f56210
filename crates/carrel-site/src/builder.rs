//! Static site builder.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

use carrel_components::{Cell, Palette, RowVisibility, Table, TableRenderer};
use carrel_content::{load_nav_data, parse_page, Frontmatter, ParsedPage};

use crate::assets::AssetPipeline;
use crate::templates::{NavItem, PageContext, TemplateEngine, TocEntry};

/// Configuration for building the documentation site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source docs directory
    pub docs_dir: PathBuf,

    /// Side-nav ordering data file (YAML)
    pub nav_data: Option<PathBuf>,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title shown in the header bar
    pub title: String,

    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            nav_data: None,
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            title: "Design System".to_string(),
            styles: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of component demos rendered
    pub demos: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to read docs directory: {0}")]
    ReadError(String),

    #[error("failed to parse page {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("failed to render template: {0}")]
    TemplateError(String),

    #[error("failed to write output: {0}")]
    WriteError(String),
}

/// A page to be built.
#[derive(Debug)]
struct PageInfo {
    /// Source file path
    source_path: PathBuf,

    /// Relative path from the docs dir
    relative_path: PathBuf,

    /// Output path
    output_path: PathBuf,

    /// Parsed page
    page: ParsedPage,
}

impl PageInfo {
    fn frontmatter(&self) -> Option<&Frontmatter> {
        self.page.frontmatter.as_ref()
    }

    fn title(&self) -> String {
        self.frontmatter().map(|f| f.title.clone()).unwrap_or_else(|| {
            self.relative_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        })
    }

    /// Slug the nav data refers to this page by.
    fn slug(&self) -> String {
        if let Some(slug) = self.frontmatter().and_then(|f| f.slug.clone()) {
            return slug;
        }

        let stem = self
            .relative_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("index");

        if stem == "index" {
            self.relative_path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|s| s.to_str())
                .unwrap_or("index")
                .to_string()
        } else {
            stem.to_string()
        }
    }
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    renderer: TableRenderer,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    ///
    /// Demo tables that use route references get a plain anchor delegate so
    /// previews stay navigable without a client-side router.
    pub fn new(config: BuildConfig) -> Self {
        let renderer = TableRenderer::new().with_anchor(|cell: &Cell| {
            format!(
                r#"<a data-route href="{}">{}</a>"#,
                cell.to.as_deref().unwrap_or(""),
                cell.text
            )
        });

        Self {
            config,
            renderer,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let pages = self.discover_pages()?;
        let nav = self.build_navigation(&pages);

        let results: Vec<Result<usize, BuildError>> = pages
            .par_iter()
            .map(|page| self.build_page(page, &nav))
            .collect();

        let mut total_demos = 0;
        for result in results {
            total_demos += result?;
        }

        self.generate_assets()?;
        self.generate_search_index(&pages)?;
        self.generate_sitemap(&pages)?;

        Ok(BuildResult {
            pages: pages.len(),
            demos: total_demos,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Discover all markdown pages in the docs directory.
    fn discover_pages(&self) -> Result<Vec<PageInfo>, BuildError> {
        let mut pages = Vec::new();

        if !self.config.docs_dir.exists() {
            return Err(BuildError::ReadError(format!(
                "docs directory not found: {}",
                self.config.docs_dir.display()
            )));
        }

        for entry in WalkDir::new(&self.config.docs_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" && ext != "mdx" {
                continue;
            }

            let content = fs::read_to_string(path)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;

            let page = parse_page(&content).map_err(|e| BuildError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let relative_path = path
                .strip_prefix(&self.config.docs_dir)
                .unwrap_or(path)
                .to_path_buf();

            let output_path = self.calculate_output_path(&relative_path, &page.frontmatter);

            pages.push(PageInfo {
                source_path: path.to_path_buf(),
                relative_path,
                output_path,
                page,
            });
        }

        // Order from frontmatter; unordered pages sink to the end.
        pages.sort_by_key(|p| p.frontmatter().and_then(|f| f.order).unwrap_or(999));

        Ok(pages)
    }

    /// Calculate the output path for a page.
    fn calculate_output_path(&self, relative: &Path, frontmatter: &Option<Frontmatter>) -> PathBuf {
        if let Some(fm) = frontmatter {
            if let Some(slug) = &fm.slug {
                return self.config.output_dir.join(slug).join("index.html");
            }
        }

        let stem = relative
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("index");

        let parent = relative.parent().unwrap_or(Path::new(""));

        if stem == "index" {
            self.config.output_dir.join(parent).join("index.html")
        } else {
            self.config
                .output_dir
                .join(parent)
                .join(stem)
                .join("index.html")
        }
    }

    /// Build the sidebar navigation.
    ///
    /// The nav data file decides grouping and order when present; anything
    /// it does not mention (and everything, when there is no data file)
    /// falls back to directory-derived navigation.
    fn build_navigation(&self, pages: &[PageInfo]) -> Vec<NavItem> {
        let entries = match &self.config.nav_data {
            Some(path) if path.exists() => match load_nav_data(path) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("ignoring nav data: {}", e);
                    vec![]
                }
            },
            _ => vec![],
        };

        let mut by_slug: HashMap<String, &PageInfo> = HashMap::new();
        for page in pages {
            by_slug.insert(page.slug(), page);
        }

        let mut nav = Vec::new();
        let mut placed: Vec<String> = Vec::new();

        for entry in &entries {
            let Some(page) = by_slug.get(&entry.page) else {
                tracing::warn!("nav data references unknown page: {}", entry.page);
                continue;
            };

            let children = entry
                .pages
                .iter()
                .filter_map(|slug| {
                    let Some(child) = by_slug.get(slug) else {
                        tracing::warn!("nav data references unknown page: {}", slug);
                        return None;
                    };
                    placed.push(slug.clone());
                    Some(self.nav_item(child))
                })
                .collect();

            placed.push(entry.page.clone());
            nav.push(NavItem {
                children,
                ..self.nav_item(page)
            });
        }

        // Directory fallback for the rest.
        let mut dirs: HashMap<PathBuf, Vec<NavItem>> = HashMap::new();

        for page in pages {
            if placed.contains(&page.slug()) {
                continue;
            }
            if let Some(f) = page.frontmatter() {
                if !f.nav {
                    continue;
                }
            }

            let parent = page.relative_path.parent().unwrap_or(Path::new(""));
            dirs.entry(parent.to_path_buf())
                .or_default()
                .push(self.nav_item(page));
        }

        if let Some(root_items) = dirs.remove(&PathBuf::new()) {
            nav.extend(root_items);
        }

        for (dir, items) in dirs {
            let dir_name: &str = dir
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("Section");

            nav.push(NavItem {
                title: capitalize(dir_name),
                path: format!("{}{}/", self.config.base_url, dir.display()),
                children: items,
                active: false,
            });
        }

        nav
    }

    fn nav_item(&self, page: &PageInfo) -> NavItem {
        NavItem {
            title: page.title(),
            path: self.path_to_url(&page.output_path),
            children: Vec::new(),
            active: false,
        }
    }

    /// Convert an output path to a URL.
    fn path_to_url(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.config.output_dir).unwrap_or(path);

        let url = relative
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        if url.is_empty() {
            self.config.base_url.clone()
        } else {
            format!("{}{}/", self.config.base_url, url)
        }
    }

    /// Build a single page. Returns the number of demos rendered.
    fn build_page(&self, page: &PageInfo, nav: &[NavItem]) -> Result<usize, BuildError> {
        let mut replacements: HashMap<String, String> = HashMap::new();

        for block in &page.page.blocks {
            if !block.is_demo() {
                continue;
            }

            match self.render_demo(&block.source) {
                Ok(html) => {
                    replacements.insert(block.id.clone(), html);
                }
                Err(message) => {
                    tracing::warn!(
                        "skipping demo block {} in {}: {}",
                        block.id,
                        page.source_path.display(),
                        message
                    );
                }
            }
        }

        let content_html = self.render_markdown(&page.page.content, page, &replacements);

        let toc: Vec<TocEntry> = page
            .page
            .toc
            .iter()
            .map(|e| TocEntry {
                title: e.title.clone(),
                id: e.id.clone(),
                level: e.level,
            })
            .collect();

        let context = PageContext {
            title: page.title(),
            site_title: self.config.title.clone(),
            status: page
                .frontmatter()
                .map(|f| f.status.as_str().to_string())
                .unwrap_or_else(|| "stable".to_string()),
            content: content_html,
            nav: nav.to_vec(),
            toc,
            base_url: self.config.base_url.clone(),
            styles: self
                .config
                .styles
                .iter()
                .map(|s| {
                    let filename = Path::new(s)
                        .file_name()
                        .and_then(|f| f.to_str())
                        .unwrap_or("style.css");
                    format!("{}assets/{}", self.config.base_url, filename)
                })
                .collect(),
        };

        let html = self
            .templates
            .render_page("doc.html", &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        if let Some(parent) = page.output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&page.output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(replacements.len())
    }

    /// Deserialize a demo block into a table and render it collapsed.
    fn render_demo(&self, source: &str) -> Result<String, String> {
        let table: Table = serde_yaml::from_str(source).map_err(|e| e.to_string())?;

        self.renderer
            .render(&table, RowVisibility::Collapsed)
            .map_err(|e| e.to_string())
    }

    /// Render markdown to HTML, replacing demo blocks with live previews.
    fn render_markdown(
        &self,
        content: &str,
        page: &PageInfo,
        replacements: &HashMap<String, String>,
    ) -> String {
        use pulldown_cmark::{html, Options, Parser};

        let mut processed = content.to_string();

        for block in &page.page.blocks {
            let Some(preview_html) = replacements.get(&block.id) else {
                continue;
            };

            // Swap the fenced demo for its preview plus the source listing.
            // The regex is compiled per block because the pattern embeds the
            // block's own source; pages carry few demos.
            let escaped_source = regex::escape(block.source.trim());
            let pattern = format!(r"```ya?ml\s+demo[^\n]*\n{}\n?```", escaped_source);

            if let Ok(re) = Regex::new(&pattern) {
                let preview = format!(
                    "<div class=\"preview-container\">{}</div>\n\n```yaml\n{}\n```",
                    preview_html,
                    block.source.trim()
                );
                processed = re.replace(&processed, preview.as_str()).to_string();
            }
        }

        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;

        let parser = Parser::new_ext(&processed, options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        html_output
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::stylesheet(&Palette::default());
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join("main.js"), AssetPipeline::script())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let filename = source_path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("style.css");
                let content = fs::read_to_string(&source_path).map_err(|e| {
                    BuildError::ReadError(format!("failed to read stylesheet: {}", e))
                })?;
                fs::write(assets_dir.join(filename), content)
                    .map_err(|e| BuildError::WriteError(e.to_string()))?;
                tracing::info!("copied stylesheet from {}", style_path);
            } else {
                tracing::warn!("stylesheet not found: {}", style_path);
            }
        }

        Ok(())
    }

    /// Generate the search index.
    fn generate_search_index(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let index: Vec<serde_json::Value> = pages
            .iter()
            .map(|page| {
                let description = page
                    .frontmatter()
                    .and_then(|f| f.description.clone())
                    .unwrap_or_default();

                let content = page
                    .page
                    .content
                    .lines()
                    .filter(|l| !l.starts_with('#') && !l.starts_with("```"))
                    .take(10)
                    .collect::<Vec<_>>()
                    .join(" ");

                serde_json::json!({
                    "title": page.title(),
                    "description": description,
                    "url": self.path_to_url(&page.output_path),
                    "content": content,
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(self.config.output_dir.join("search-index.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate sitemap.xml and robots.txt.
    fn generate_sitemap(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let urls: Vec<String> = pages
            .iter()
            .map(|page| {
                format!(
                    "  <url>\n    <loc>{}{}</loc>\n  </url>",
                    self.config.base_url.trim_end_matches('/'),
                    self.path_to_url(&page.output_path)
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

/// Capitalize the first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_simple_site() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        fs::create_dir_all(&docs).unwrap();
        fs::write(
            docs.join("index.md"),
            r#"---
title: Home
---
# Welcome
"#,
        )
        .unwrap();

        let config = BuildConfig {
            docs_dir: docs,
            output_dir: out.clone(),
            ..Default::default()
        };

        let result = SiteBuilder::new(config).build().await.unwrap();

        assert_eq!(result.pages, 1);
        assert!(out.join("index.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
    }

    #[tokio::test]
    async fn renders_demo_blocks_as_previews() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        fs::create_dir_all(&docs).unwrap();
        fs::write(
            docs.join("resource-access.md"),
            r#"---
title: Resource Access
---
# Resource Access

```yaml demo
headings: [Format, Link]
name: formats
rows:
  - - text: PDF
    - text: Download
      href: /f.pdf
```
"#,
        )
        .unwrap();

        let config = BuildConfig {
            docs_dir: docs,
            output_dir: out.clone(),
            ..Default::default()
        };

        let result = SiteBuilder::new(config).build().await.unwrap();
        assert_eq!(result.demos, 1);

        let html = fs::read_to_string(out.join("resource-access/index.html")).unwrap();
        assert!(html.contains("preview-container"));
        assert!(html.contains(r#"<figure class="resource-access">"#));
        assert!(html.contains(r#"<a href="/f.pdf">Download</a>"#));
        // The source listing stays alongside the preview.
        assert!(html.contains("headings: [Format, Link]"));
    }

    #[tokio::test]
    async fn invalid_demo_degrades_to_a_code_listing() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        fs::create_dir_all(&docs).unwrap();
        // Empty rows fail table validation.
        fs::write(
            docs.join("broken.md"),
            "---\ntitle: Broken\n---\n\n```yaml demo\nheadings: [A]\nrows: []\n```\n",
        )
        .unwrap();

        let config = BuildConfig {
            docs_dir: docs,
            output_dir: out.clone(),
            ..Default::default()
        };

        let result = SiteBuilder::new(config).build().await.unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.demos, 0);

        let html = fs::read_to_string(out.join("broken/index.html")).unwrap();
        assert!(!html.contains("preview-container"));
        assert!(html.contains("rows: []"));
    }

    #[tokio::test]
    async fn nav_data_orders_the_sidebar() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");
        let nav_file = temp.path().join("nav.yml");

        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("getting-started.md"), "---\ntitle: Getting Started\n---\nHi").unwrap();
        fs::write(docs.join("components.md"), "---\ntitle: Components\n---\nHi").unwrap();
        fs::write(
            docs.join("resource-access.md"),
            "---\ntitle: Resource Access\n---\nHi",
        )
        .unwrap();
        fs::write(
            &nav_file,
            "- page: getting-started\n- page: components\n  pages:\n    - resource-access\n",
        )
        .unwrap();

        let config = BuildConfig {
            docs_dir: docs,
            nav_data: Some(nav_file),
            output_dir: out.clone(),
            ..Default::default()
        };

        SiteBuilder::new(config).build().await.unwrap();

        let html = fs::read_to_string(out.join("getting-started/index.html")).unwrap();
        let started = html.find("Getting Started").unwrap();
        let components = html.find(">Components<").unwrap();
        assert!(started < components);
        assert!(html.contains("/resource-access/"));
    }

    #[tokio::test]
    async fn generates_search_index() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        fs::create_dir_all(&docs).unwrap();
        fs::write(
            docs.join("index.md"),
            "---\ntitle: Searchable\n---\n# Searchable Content",
        )
        .unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            docs_dir: docs,
            output_dir: out.clone(),
            ..Default::default()
        });

        builder.build().await.unwrap();

        let index = fs::read_to_string(out.join("search-index.json")).unwrap();
        assert!(index.contains("Searchable"));
    }
}
