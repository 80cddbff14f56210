//! Template engine for rendering documentation pages.
//!
//! The layout mirrors the design-system site: a header bar with the site
//! title, a side nav driven by nav data, and the page content with an
//! on-this-page list.

use minijinja::{context, Environment};

/// A navigation item.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// URL path
    pub path: String,
    /// Child items
    pub children: Vec<NavItem>,
    /// Whether this is the active page
    pub active: bool,
}

/// A table of contents entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TocEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Context for rendering a page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Page title
    pub title: String,
    /// Site title shown in the header bar
    pub site_title: String,
    /// Component lifecycle status badge ("stable", "beta", ...)
    pub status: String,
    /// Rendered content HTML
    pub content: String,
    /// Navigation items
    pub nav: Vec<NavItem>,
    /// Table of contents
    pub toc: Vec<TocEntry>,
    /// Base URL
    pub base_url: String,
    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");
        env.add_template_owned("doc.html".to_string(), DOC_TEMPLATE.to_string())
            .expect("Failed to add doc template");
        env.add_template_owned("nav.html".to_string(), NAV_TEMPLATE.to_string())
            .expect("Failed to add nav template");

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &PageContext,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            site_title => &context.site_title,
            status => &context.status,
            content => &context.content,
            nav => &context.nav,
            toc => &context.toc,
            base_url => &context.base_url,
            styles => &context.styles,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <a class="skip-link" href="#content">Skip to main content</a>
  <header class="site-header">
    <a href="{{ base_url }}" class="site-title">{{ site_title }}</a>
  </header>
  <div class="docs">
    <nav class="sidenav" aria-label="Site">
      {% include "nav.html" %}
    </nav>
    <main class="docs-content" id="content">
      {% block content %}{% endblock %}
    </main>
  </div>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const DOC_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="doc">
  {% if status and status != "stable" %}
  <span class="status-badge status-{{ status }}">{{ status }}</span>
  {% endif %}
  <div class="content">
    {{ content | safe }}
  </div>
</article>

{% if toc %}
<aside class="toc">
  <h2>On this page</h2>
  <ul>
  {% for entry in toc %}
    <li class="toc-level-{{ entry.level }}">
      <a href="#{{ entry.id }}">{{ entry.title }}</a>
    </li>
  {% endfor %}
  </ul>
</aside>
{% endif %}
{% endblock %}"##;

const NAV_TEMPLATE: &str = r##"<ul class="nav-list">
{% for item in nav %}
  <li class="nav-item{% if item.active %} active{% endif %}">
    <a href="{{ item.path }}">{{ item.title }}</a>
    {% if item.children %}
    <ul class="nav-children">
      {% for child in item.children %}
      <li class="nav-item{% if child.active %} active{% endif %}">
        <a href="{{ child.path }}">{{ child.title }}</a>
      </li>
      {% endfor %}
    </ul>
    {% endif %}
  </li>
{% endfor %}
</ul>"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> PageContext {
        PageContext {
            title: "Resource Access".to_string(),
            site_title: "Design System".to_string(),
            status: "stable".to_string(),
            content: "<p>Hello world</p>".to_string(),
            nav: vec![],
            toc: vec![],
            base_url: "/".to_string(),
            styles: vec![],
        }
    }

    #[test]
    fn renders_basic_page() {
        let engine = TemplateEngine::new();
        let html = engine.render_page("doc.html", &context()).unwrap();

        assert!(html.contains("<title>Resource Access - Design System</title>"));
        assert!(html.contains("<p>Hello world</p>"));
        assert!(html.contains(r#"class="site-title""#));
    }

    #[test]
    fn stable_pages_get_no_status_badge() {
        let engine = TemplateEngine::new();
        let html = engine.render_page("doc.html", &context()).unwrap();
        assert!(!html.contains("status-badge"));
    }

    #[test]
    fn non_stable_pages_get_a_status_badge() {
        let engine = TemplateEngine::new();
        let mut ctx = context();
        ctx.status = "beta".to_string();

        let html = engine.render_page("doc.html", &ctx).unwrap();
        assert!(html.contains(r#"class="status-badge status-beta""#));
    }

    #[test]
    fn renders_navigation_tree() {
        let engine = TemplateEngine::new();
        let mut ctx = context();
        ctx.nav = vec![
            NavItem {
                title: "Getting Started".to_string(),
                path: "/getting-started/".to_string(),
                children: vec![],
                active: false,
            },
            NavItem {
                title: "Components".to_string(),
                path: "/components/".to_string(),
                children: vec![NavItem {
                    title: "Resource Access".to_string(),
                    path: "/components/resource-access/".to_string(),
                    children: vec![],
                    active: true,
                }],
                active: false,
            },
        ];

        let html = engine.render_page("doc.html", &ctx).unwrap();

        assert!(html.contains("Getting Started"));
        assert!(html.contains("/components/resource-access/"));
        assert!(html.contains("nav-children"));
    }
}
