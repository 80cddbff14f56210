//! Initialize documentation in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing carrel...");

    let docs_dir = Path::new("docs");

    if docs_dir.exists() {
        if !yes {
            tracing::warn!("docs/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(docs_dir).context("Failed to create docs directory")?;
    }

    let config_path = Path::new("carrel.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write carrel.toml")?;
        tracing::info!("Created carrel.toml");
    }

    let index_path = docs_dir.join("index.md");
    if !index_path.exists() || yes {
        fs::write(&index_path, DEFAULT_INDEX).context("Failed to write index.md")?;
        tracing::info!("Created docs/index.md");
    }

    let components_dir = docs_dir.join("components");
    if !components_dir.exists() {
        fs::create_dir_all(&components_dir).context("Failed to create components directory")?;
    }

    let table_path = components_dir.join("resource-access.md");
    if !table_path.exists() || yes {
        fs::write(&table_path, DEFAULT_RESOURCE_ACCESS_DOC)
            .context("Failed to write resource-access.md")?;
        tracing::info!("Created docs/components/resource-access.md");
    }

    let data_dir = Path::new("data");
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;
    }

    let nav_path = data_dir.join("nav.yml");
    if !nav_path.exists() || yes {
        fs::write(&nav_path, DEFAULT_NAV).context("Failed to write nav.yml")?;
        tracing::info!("Created data/nav.yml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'carrel build' then 'carrel serve' to preview the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# carrel configuration

[docs]
# Source directory for documentation
dir = "docs"

# Output directory for the built site
output = "dist"

# Site title shown in the header bar
title = "Design System"

# Base URL (for deployment)
base_url = "/"

[data]
# Side-nav ordering data
nav = "data/nav.yml"

[build]
# Minify CSS output
minify = true
"#;

const DEFAULT_NAV: &str = r#"- page: index
- page: resource-access
"#;

const DEFAULT_INDEX: &str = r#"---
title: Welcome
order: 1
---

# Design System

Documentation for the component library. Pages live in `docs/` as markdown
with YAML frontmatter; fenced `yaml demo` blocks render live component
previews.
"#;

const DEFAULT_RESOURCE_ACCESS_DOC: &str = r#"---
title: Resource Access
description: A comprehensive listing of the options to access a resource.
order: 2
---

# Resource Access

Use this component to provide a comprehensive listing of the options to
access a resource. Multi-row tables collapse to their first row, with a
reveal control to show the rest.

```yaml demo
caption: Current issues
name: formats
headings: [Format, Link]
notes:
  - Ask at the desk for older issues.
rows:
  - - text: Online
      icon: link
    - text: Read now
      href: /read/1
  - - text: PDF
    - text: Download
      href: /f.pdf
  - - text: Print
      intent: warning
    - text: Request
      to: /request/1
```

## Long listings

```yaml demo
name: holdings
headings: [Location, Status]
rows:
  - [{ text: Main Stacks }, { text: Available, intent: success }]
  - [{ text: Annex }, { text: Available, intent: success }]
  - [{ text: Media Center }, { text: Checked out, intent: warning }]
  - [{ text: Special Collections }, { text: By appointment }]
  - [{ text: North Branch }, { text: Available, intent: success }]
  - [{ text: South Branch }, { text: Missing, intent: error }]
  - [{ text: Storage }, { text: Request ahead }]
  - [{ text: Microforms }, { text: Available, intent: success }]
```
"#;
