//! Table cell model and renderer.

use serde::Deserialize;

use crate::escape::html_escape;
use crate::icons::IconSource;

/// Semantic classification of a cell, driving its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Default,
    Success,
    Warning,
    Error,
}

/// A single table cell.
///
/// At most one of `href`, `to`, or `html` should be set; when several are
/// present the renderer picks the first in that order. A cell with none of
/// them renders its `text` literally, and an empty `text` renders empty
/// content after the icon.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cell {
    /// Displayed text, also used as the link label.
    #[serde(default)]
    pub text: String,

    /// Display intent, mapped to a color by the palette.
    #[serde(default)]
    pub intent: Intent,

    /// Optional icon name rendered before the content.
    #[serde(default)]
    pub icon: Option<String>,

    /// Plain hyperlink target.
    #[serde(default)]
    pub href: Option<String>,

    /// Route reference, rendered through the caller's anchor delegate.
    #[serde(default)]
    pub to: Option<String>,

    /// Trusted raw markup, emitted verbatim. The caller is responsible for
    /// sanitizing this before it reaches the renderer.
    #[serde(default)]
    pub html: Option<String>,
}

impl Cell {
    /// A plain text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A hyperlinked cell.
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Renders a navigable link for route-based cells.
///
/// Cells that use `to` instead of `href` are handed to this delegate, so a
/// routing system can be substituted without the table knowing about it.
/// The returned markup is embedded in the output verbatim.
pub trait RenderAnchor: Send + Sync {
    fn render_anchor(&self, cell: &Cell) -> String;
}

impl<F> RenderAnchor for F
where
    F: Fn(&Cell) -> String + Send + Sync,
{
    fn render_anchor(&self, cell: &Cell) -> String {
        self(cell)
    }
}

/// Render a cell's content.
///
/// The icon prefix is independent of the content branch. Exactly one of the
/// link/markup/text branches fires, in `href` -> `to` -> `html` -> `text`
/// order. A `to` cell without an anchor delegate is a configuration error;
/// it is logged and the cell degrades to its text.
pub fn render_cell(
    cell: &Cell,
    icons: &dyn IconSource,
    anchor: Option<&dyn RenderAnchor>,
) -> String {
    let mut out = String::new();

    if let Some(name) = &cell.icon {
        match icons.glyph(name) {
            Some(svg) => {
                out.push_str(&format!(r#"<span class="cell-icon">{}</span>"#, svg));
            }
            None => {
                tracing::debug!("unknown icon: {}", name);
            }
        }
    }

    if let Some(href) = &cell.href {
        out.push_str(&format!(
            r#"<a href="{}">{}</a>"#,
            html_escape(href),
            html_escape(&cell.text)
        ));
    } else if cell.to.is_some() {
        match anchor {
            Some(anchor) => out.push_str(&anchor.render_anchor(cell)),
            None => {
                tracing::warn!(
                    "cell uses a route reference but no anchor renderer is configured"
                );
                out.push_str(&html_escape(&cell.text));
            }
        }
    } else if let Some(html) = &cell.html {
        out.push_str(html);
    } else {
        out.push_str(&html_escape(&cell.text));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{BuiltinIcons, NoIcons};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_plain_text_without_link_wrapper() {
        let cell = Cell::text("Physical copy");
        let out = render_cell(&cell, &NoIcons, None);
        assert_eq!(out, "Physical copy");
    }

    #[test]
    fn renders_hyperlink_with_target_and_label() {
        let cell = Cell::link("Download", "/f.pdf");
        let out = render_cell(&cell, &NoIcons, None);
        assert_eq!(out, r#"<a href="/f.pdf">Download</a>"#);
    }

    #[test]
    fn delegates_route_cells_to_the_anchor_renderer() {
        let cell = Cell {
            text: "Holdings".to_string(),
            to: Some("/holdings/123".to_string()),
            ..Cell::default()
        };

        let anchor = |c: &Cell| format!("<router-link to={}>{}</router-link>", c.to.as_deref().unwrap(), c.text);
        let out = render_cell(&cell, &NoIcons, Some(&anchor));

        assert_eq!(out, "<router-link to=/holdings/123>Holdings</router-link>");
    }

    #[test]
    fn route_cell_without_delegate_falls_back_to_text() {
        let cell = Cell {
            text: "Holdings".to_string(),
            to: Some("/holdings/123".to_string()),
            ..Cell::default()
        };

        let out = render_cell(&cell, &NoIcons, None);
        assert_eq!(out, "Holdings");
    }

    #[test]
    fn emits_raw_markup_unescaped() {
        let cell = Cell {
            html: Some("<em>1991-present</em>".to_string()),
            ..Cell::default()
        };

        let out = render_cell(&cell, &NoIcons, None);
        assert_eq!(out, "<em>1991-present</em>");
    }

    #[test]
    fn href_wins_over_html() {
        let cell = Cell {
            text: "Link".to_string(),
            href: Some("/a".to_string()),
            html: Some("<b>ignored</b>".to_string()),
            ..Cell::default()
        };

        let out = render_cell(&cell, &NoIcons, None);
        assert_eq!(out, r#"<a href="/a">Link</a>"#);
    }

    #[test]
    fn escapes_text_and_href() {
        let cell = Cell::link("a & b", "/q?x=1&y=2");
        let out = render_cell(&cell, &NoIcons, None);
        assert_eq!(out, r#"<a href="/q?x=1&amp;y=2">a &amp; b</a>"#);
    }

    #[test]
    fn icon_prefix_is_independent_of_content() {
        let cell = Cell::text("Online").with_icon("link");
        let out = render_cell(&cell, &BuiltinIcons, None);

        assert!(out.starts_with(r#"<span class="cell-icon">"#));
        assert!(out.ends_with("Online"));
    }

    #[test]
    fn empty_cell_renders_empty_content() {
        let out = render_cell(&Cell::default(), &NoIcons, None);
        assert_eq!(out, "");
    }

    #[test]
    fn deserializes_from_yaml() {
        let cell: Cell =
            serde_yaml::from_str("text: Available\nintent: success\nicon: check").unwrap();
        assert_eq!(cell.text, "Available");
        assert_eq!(cell.intent, Intent::Success);
        assert_eq!(cell.icon.as_deref(), Some("check"));
    }
}
