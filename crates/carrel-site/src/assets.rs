//! Asset pipeline for CSS and JavaScript processing.

use carrel_components::Palette;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the site stylesheet, with the design tokens taken from the
    /// component palette so CSS and server-rendered inline colors agree.
    pub fn stylesheet(palette: &Palette) -> String {
        format!(
            ":root {{\n  --grey-400: {};\n  --grey-600: {};\n  --text: {};\n  --success: {};\n  --warning: {};\n  --error: {};\n  --brand: {};\n  --sidenav-width: 280px;\n  --toc-width: 200px;\n  --content-max-width: 800px;\n}}\n\n{}",
            palette.grey_400,
            palette.grey_600,
            palette.text,
            palette.success,
            palette.warning,
            palette.error,
            palette.brand,
            BASE_CSS
        )
    }

    /// Generate the runtime JavaScript.
    pub fn script() -> String {
        RUNTIME_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const BASE_CSS: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  color: var(--text);
  line-height: 1.6;
}

.skip-link {
  position: absolute;
  left: -9999px;
  top: 0;
  background: var(--brand);
  color: #fff;
  padding: 0.5rem 1rem;
}

.skip-link:focus {
  left: 0;
}

/* Header bar */
.site-header {
  background: var(--brand);
  padding: 0.75rem 1.5rem;
}

.site-title {
  color: #fff;
  font-weight: 700;
  font-size: 1.125rem;
  text-decoration: none;
}

/* Layout */
.docs {
  display: grid;
  grid-template-columns: var(--sidenav-width) 1fr;
  min-height: calc(100vh - 3rem);
}

.sidenav {
  border-right: 1px solid var(--grey-400);
  padding: 1.5rem;
  position: sticky;
  top: 0;
  overflow-y: auto;
}

.nav-list {
  list-style: none;
}

.nav-item {
  margin-bottom: 0.25rem;
}

.nav-item a {
  display: block;
  padding: 0.375rem 0.75rem;
  color: var(--grey-600);
  text-decoration: none;
  border-radius: 0.25rem;
}

.nav-item a:hover {
  color: var(--text);
  background: var(--grey-400);
}

.nav-item.active > a {
  color: var(--brand);
  font-weight: 600;
}

.nav-children {
  list-style: none;
  margin-left: 1rem;
  margin-top: 0.25rem;
}

.docs-content {
  display: grid;
  grid-template-columns: 1fr var(--toc-width);
  gap: 2rem;
  padding: 2rem;
  max-width: calc(var(--content-max-width) + var(--toc-width) + 4rem);
}

.doc {
  max-width: var(--content-max-width);
}

.status-badge {
  display: inline-block;
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  padding: 0.125rem 0.5rem;
  border-radius: 0.25rem;
  background: var(--grey-400);
  color: var(--grey-600);
}

.status-beta {
  background: var(--warning);
  color: #fff;
}

.status-deprecated {
  background: var(--error);
  color: #fff;
}

.content h1 {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.content h2 {
  font-size: 1.5rem;
  font-weight: 600;
  margin: 2rem 0 1rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid var(--grey-400);
}

.content h3 {
  font-size: 1.25rem;
  font-weight: 600;
  margin: 1.5rem 0 0.75rem;
}

.content p {
  margin-bottom: 1rem;
}

.content a {
  color: var(--brand);
  text-decoration: underline;
  text-underline-offset: 4px;
}

.content ul,
.content ol {
  margin: 0 0 1rem 1.5rem;
}

/* Code blocks */
.content pre {
  background: #f6f8fa;
  border: 1px solid var(--grey-400);
  border-radius: 0.375rem;
  padding: 1rem;
  overflow-x: auto;
  font-family: ui-monospace, monospace;
  font-size: 0.875rem;
  margin-bottom: 1rem;
  position: relative;
}

.content code {
  font-family: ui-monospace, monospace;
  font-size: 0.875em;
}

/* Component demo container */
.preview-container {
  border: 1px solid var(--grey-400);
  border-radius: 0.375rem;
  padding: 2rem;
  margin-bottom: 0.5rem;
  overflow-x: auto;
}

/* Resource access table */
.resource-access {
  overflow-x: auto;
  overflow-y: visible;
  margin: 0;
  padding: 0;
}

.resource-access-caption {
  display: flex;
  align-items: baseline;
  flex-wrap: wrap;
  gap: 0 0.75rem;
}

.caption-text {
  font-weight: 600;
}

.caption-link {
  font-size: 0.875rem;
}

.caption-notes {
  font-size: 0.875rem;
  margin: 0;
  padding: 0;
  list-style: none;
  flex-basis: 100%;
}

.resource-access table {
  border-collapse: collapse;
  border-spacing: 0;
  width: 100%;
  min-width: 30rem;
  table-layout: fixed;
}

.resource-access th {
  font-size: 0.875rem;
  color: var(--grey-600);
  border-bottom: solid 2px var(--grey-400);
}

.resource-access td,
.resource-access th {
  padding: 0.5rem 0;
  text-align: left;
}

.resource-access td:not(:last-child),
.resource-access th:not(:last-child) {
  padding-right: 1rem;
}

.resource-access tbody tr:not(:last-child) {
  border-bottom: solid 1px var(--grey-400);
}

.cell-icon {
  margin-right: 0.25rem;
  vertical-align: text-bottom;
}

.reveal-row td {
  padding: 0.5rem 0;
}

.reveal-control {
  font-size: 0.875rem;
  font-weight: 500;
  padding: 0.25rem 0.75rem;
  background: #fff;
  color: var(--brand);
  border: 1px solid var(--grey-400);
  border-radius: 0.25rem;
  cursor: pointer;
}

.reveal-control[aria-expanded="true"] {
  color: var(--grey-600);
}

/* Table of contents */
.toc {
  position: sticky;
  top: 2rem;
  align-self: start;
}

.toc h2 {
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--grey-600);
  margin-bottom: 0.75rem;
}

.toc ul {
  list-style: none;
}

.toc li {
  margin-bottom: 0.25rem;
}

.toc a {
  font-size: 0.875rem;
  color: var(--grey-600);
  text-decoration: none;
}

.toc a:hover {
  color: var(--text);
}

.toc-level-3 {
  padding-left: 1rem;
}

.toc-level-4 {
  padding-left: 2rem;
}

/* Responsive */
@media (max-width: 1024px) {
  .docs {
    grid-template-columns: 1fr;
  }

  .sidenav {
    position: static;
    border-right: none;
    border-bottom: 1px solid var(--grey-400);
  }

  .docs-content {
    grid-template-columns: 1fr;
  }

  .toc {
    display: none;
  }
}
"#;

const RUNTIME_JS: &str = r#"// carrel docs runtime
(function() {
  'use strict';

  // Reveal controls: one-way expand of collapsed table rows. After the
  // click the table must look exactly like its expanded server render:
  // every row visible, controls marked expanded, and a trailing control
  // row after the revealed tail.
  document.querySelectorAll('.reveal-control').forEach(btn => {
    btn.addEventListener('click', () => {
      if (btn.getAttribute('aria-expanded') === 'true') return;

      const body = document.getElementById(btn.getAttribute('aria-controls'));
      if (!body) return;

      body.querySelectorAll('tr[hidden]').forEach(tr => tr.removeAttribute('hidden'));
      body.querySelectorAll('.reveal-control').forEach(b => {
        b.setAttribute('aria-expanded', 'true');
      });

      const last = body.lastElementChild;
      if (!last || !last.classList.contains('reveal-row')) {
        body.appendChild(btn.closest('tr').cloneNode(true));
      }
    });
  });

  // Highlight the current nav item.
  const currentPath = window.location.pathname;
  document.querySelectorAll('.nav-item a').forEach(link => {
    const href = link.getAttribute('href');
    if (href === currentPath || (currentPath.startsWith(href) && href !== '/')) {
      link.parentElement.classList.add('active');
    }
  });

  // Copy button for code listings.
  document.querySelectorAll('.content pre').forEach(pre => {
    if (pre.querySelector('.copy-btn')) return;

    const btn = document.createElement('button');
    btn.className = 'copy-btn';
    btn.textContent = 'Copy';
    btn.setAttribute('type', 'button');

    btn.addEventListener('click', async () => {
      const code = pre.querySelector('code');
      const text = code ? code.textContent : pre.textContent;

      try {
        await navigator.clipboard.writeText(text || '');
        btn.textContent = 'Copied!';
        setTimeout(() => { btn.textContent = 'Copy'; }, 2000);
      } catch (err) {
        btn.textContent = 'Error';
        setTimeout(() => { btn.textContent = 'Copy'; }, 2000);
      }
    });

    pre.appendChild(btn);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_embeds_palette_tokens() {
        let palette = Palette::default();
        let css = AssetPipeline::stylesheet(&palette);

        assert!(css.contains(":root"));
        assert!(css.contains(&format!("--grey-600: {};", palette.grey_600)));
        assert!(css.contains(".resource-access"));
        assert!(css.contains(".reveal-control"));
    }

    #[test]
    fn script_wires_the_reveal_controls() {
        let js = AssetPipeline::script();
        assert!(js.contains(".reveal-control"));
        assert!(js.contains("aria-expanded"));
        assert!(js.contains("removeAttribute('hidden')"));
    }

    #[test]
    fn script_appends_the_trailing_control_on_reveal() {
        // Post-click the table must match its expanded server render, which
        // carries a trailing control row after the revealed tail.
        let js = AssetPipeline::script();
        assert!(js.contains("classList.contains('reveal-row')"));
        assert!(js.contains("cloneNode(true)"));
        assert!(js.contains("appendChild"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.reveal-control {
    background-color: white;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".reveal-control"));
    }
}
