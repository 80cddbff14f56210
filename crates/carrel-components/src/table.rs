//! The resource access table.
//!
//! Use this component to give a comprehensive listing of the options for
//! reaching a resource: one row per option, one column per attribute. Long
//! listings collapse to their first row with a reveal control for the rest.

use serde::Deserialize;
use std::fmt::Write;

use crate::cell::{render_cell, Cell, RenderAnchor};
use crate::escape::html_escape;
use crate::icons::{BuiltinIcons, IconSource};
use crate::palette::Palette;
use crate::visibility::{control_slots, visible_row_count, RowVisibility};

/// Link to more information about the table caption.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionLink {
    pub text: String,
    pub href: String,
}

/// A resource access table.
///
/// `rows` is a sequence of rows, each a sequence of cells; every row must be
/// as wide as `headings`. `name` names what the rows are (for example
/// "formats") and is used in the reveal-control label and for the
/// deterministic element ids.
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    /// Column headings.
    pub headings: Vec<String>,

    /// Data rows. Must be non-empty, each row as wide as `headings`.
    pub rows: Vec<Vec<Cell>>,

    /// Displayed table caption. Without it, no caption block is rendered and
    /// the preceding page heading should describe the table.
    #[serde(default)]
    pub caption: Option<String>,

    /// Link to more information about the caption.
    #[serde(default, alias = "captionLink")]
    pub caption_link: Option<CaptionLink>,

    /// Notes necessary to understand the access options.
    #[serde(default)]
    pub notes: Vec<String>,

    /// What the rows are, used in the reveal-control label.
    #[serde(default)]
    pub name: Option<String>,
}

/// Errors raised when a table fails its preconditions.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("table has no rows")]
    EmptyRows,

    #[error("row {row} has {found} cells but the table has {expected} headings")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Table {
    /// Check the preconditions the renderer relies on: at least one row, and
    /// every row as wide as the headings.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.rows.is_empty() {
            return Err(TableError::EmptyRows);
        }

        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.headings.len() {
                return Err(TableError::RowWidth {
                    row: i,
                    expected: self.headings.len(),
                    found: row.len(),
                });
            }
        }

        Ok(())
    }

    fn id_slug(&self) -> String {
        let name = self.name.as_deref().unwrap_or("table");
        name.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect()
    }
}

/// Renders a [`Table`] to HTML.
///
/// Rendering is a pure function of the table and a [`RowVisibility`] state:
/// the same inputs always produce the same markup. Rows beyond the first are
/// emitted with the `hidden` attribute when collapsed, so the reveal control
/// only has to flip attributes client-side.
pub struct TableRenderer {
    palette: Palette,
    icons: Box<dyn IconSource>,
    anchor: Option<Box<dyn RenderAnchor>>,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            icons: Box::new(BuiltinIcons),
            anchor: None,
        }
    }
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_icons(mut self, icons: impl IconSource + 'static) -> Self {
        self.icons = Box::new(icons);
        self
    }

    /// Supply the anchor delegate used for cells with a route reference.
    pub fn with_anchor(mut self, anchor: impl RenderAnchor + 'static) -> Self {
        self.anchor = Some(Box::new(anchor));
        self
    }

    /// Render the table in the given visibility state.
    pub fn render(&self, table: &Table, state: RowVisibility) -> Result<String, TableError> {
        table.validate()?;

        let slug = table.id_slug();
        let caption_id = format!("caption-{}", slug);
        let summary_id = format!("summary-{}", slug);
        let slots = control_slots(state, table.rows.len());
        let visible = visible_row_count(state, table.rows.len());

        let mut out = String::new();
        out.push_str(r#"<figure class="resource-access">"#);

        if let Some(caption) = &table.caption {
            self.push_caption(&mut out, table, caption, &caption_id);
        }

        if table.caption.is_some() {
            let _ = write!(out, r#"<table aria-labelledby="{}">"#, caption_id);
        } else {
            out.push_str("<table>");
        }

        out.push_str("<thead><tr>");
        for heading in &table.headings {
            let _ = write!(out, r#"<th scope="col">{}</th>"#, html_escape(heading));
        }
        out.push_str("</tr></thead>");

        let _ = write!(out, r#"<tbody id="{}">"#, summary_id);

        self.push_row(&mut out, &table.rows[0], false);

        if slots.after_first {
            self.push_control(&mut out, table, state, &summary_id);
        }

        for (i, row) in table.rows.iter().enumerate().skip(1) {
            self.push_row(&mut out, row, i >= visible);
        }

        if slots.trailing {
            self.push_control(&mut out, table, state, &summary_id);
        }

        out.push_str("</tbody></table></figure>");
        Ok(out)
    }

    fn push_caption(&self, out: &mut String, table: &Table, caption: &str, caption_id: &str) {
        out.push_str(r#"<figcaption class="resource-access-caption">"#);
        let _ = write!(
            out,
            r#"<span class="caption-text" id="{}">{}</span>"#,
            caption_id,
            html_escape(caption)
        );

        if let Some(link) = &table.caption_link {
            let _ = write!(
                out,
                r#"<a class="caption-link" href="{}">{}</a>"#,
                html_escape(&link.href),
                html_escape(&link.text)
            );
        }

        if !table.notes.is_empty() {
            out.push_str(r#"<ul class="caption-notes">"#);
            for note in &table.notes {
                let _ = write!(out, "<li>{}</li>", html_escape(note));
            }
            out.push_str("</ul>");
        }

        out.push_str("</figcaption>");
    }

    fn push_row(&self, out: &mut String, row: &[Cell], hidden: bool) {
        out.push_str(if hidden { "<tr hidden>" } else { "<tr>" });
        for cell in row {
            let _ = write!(
                out,
                r#"<td style="color: {}">{}</td>"#,
                self.palette.intent_color(cell.intent),
                render_cell(cell, self.icons.as_ref(), self.anchor.as_deref())
            );
        }
        out.push_str("</tr>");
    }

    fn push_control(
        &self,
        out: &mut String,
        table: &Table,
        state: RowVisibility,
        summary_id: &str,
    ) {
        let count = table.rows.len();
        let label = match &table.name {
            Some(name) => format!("Show all {} {}", count, name),
            None => format!("Show all {}", count),
        };

        let _ = write!(
            out,
            concat!(
                r#"<tr class="reveal-row"><td colspan="{}">"#,
                r#"<button type="button" class="reveal-control" "#,
                r#"data-reveal="{}" aria-controls="{}" aria-expanded="{}">{}</button>"#,
                "</td></tr>"
            ),
            table.headings.len(),
            table.id_slug(),
            summary_id,
            state.is_expanded(),
            html_escape(&label)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Intent;
    use pretty_assertions::assert_eq;

    fn row(texts: &[&str]) -> Vec<Cell> {
        texts.iter().map(|t| Cell::text(*t)).collect()
    }

    fn formats_table(n: usize) -> Table {
        Table {
            headings: vec!["Format".to_string(), "Link".to_string()],
            rows: (0..n)
                .map(|i| vec![Cell::text(format!("Format {}", i)), Cell::link("Go", "/go")])
                .collect(),
            caption: None,
            caption_link: None,
            notes: vec![],
            name: Some("formats".to_string()),
        }
    }

    #[test]
    fn empty_rows_is_an_error() {
        let table = Table {
            headings: vec!["Format".to_string()],
            rows: vec![],
            caption: None,
            caption_link: None,
            notes: vec![],
            name: None,
        };

        assert!(matches!(
            TableRenderer::new().render(&table, RowVisibility::Collapsed),
            Err(TableError::EmptyRows)
        ));
    }

    #[test]
    fn row_width_mismatch_is_an_error() {
        let table = Table {
            headings: vec!["Format".to_string(), "Link".to_string()],
            rows: vec![row(&["PDF", "Download"]), row(&["EPUB"])],
            caption: None,
            caption_link: None,
            notes: vec![],
            name: None,
        };

        let err = TableRenderer::new()
            .render(&table, RowVisibility::Collapsed)
            .unwrap_err();

        match err {
            TableError::RowWidth {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn single_row_renders_without_controls() {
        let table = Table {
            headings: vec!["Format".to_string(), "Link".to_string()],
            rows: vec![vec![Cell::text("PDF"), Cell::link("Download", "/f.pdf")]],
            caption: None,
            caption_link: None,
            notes: vec![],
            name: None,
        };

        let html = TableRenderer::new()
            .render(&table, RowVisibility::Collapsed)
            .unwrap();

        assert!(html.contains(r#"<a href="/f.pdf">Download</a>"#));
        assert!(!html.contains("reveal-control"));
        assert!(!html.contains("<tr hidden>"));
    }

    #[test]
    fn no_caption_means_no_figcaption() {
        let html = TableRenderer::new()
            .render(&formats_table(1), RowVisibility::Collapsed)
            .unwrap();

        assert!(!html.contains("<figcaption"));
        assert!(!html.contains("aria-labelledby"));
    }

    #[test]
    fn caption_block_renders_caption_link_and_notes() {
        let mut table = formats_table(2);
        table.caption = Some("Journal of Examples".to_string());
        table.caption_link = Some(CaptionLink {
            text: "About this journal".to_string(),
            href: "/about".to_string(),
        });
        table.notes = vec!["Coverage 1991-present".to_string()];

        let html = TableRenderer::new()
            .render(&table, RowVisibility::Collapsed)
            .unwrap();

        assert!(html.contains(r#"id="caption-formats""#));
        assert!(html.contains("Journal of Examples"));
        assert!(html.contains(r#"<a class="caption-link" href="/about">About this journal</a>"#));
        assert!(html.contains("<li>Coverage 1991-present</li>"));
        assert!(html.contains(r#"aria-labelledby="caption-formats""#));
    }

    #[test]
    fn collapsed_over_threshold_hides_the_tail_and_counts_rows() {
        let html = TableRenderer::new()
            .render(&formats_table(8), RowVisibility::Collapsed)
            .unwrap();

        assert_eq!(html.matches("<tr hidden>").count(), 7);
        assert_eq!(html.matches("reveal-control").count(), 1);
        assert!(html.contains("Show all 8 formats"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn expanded_over_threshold_shows_all_rows_and_both_controls() {
        let html = TableRenderer::new()
            .render(&formats_table(8), RowVisibility::Expanded)
            .unwrap();

        assert!(!html.contains("<tr hidden>"));
        assert_eq!(html.matches("reveal-control").count(), 2);
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn under_threshold_collapsed_hides_the_tail_behind_the_trailing_control() {
        let html = TableRenderer::new()
            .render(&formats_table(3), RowVisibility::Collapsed)
            .unwrap();

        assert_eq!(html.matches("<tr hidden>").count(), 2);
        assert_eq!(html.matches("reveal-control").count(), 1);
        assert!(html.contains("Show all 3 formats"));
    }

    #[test]
    fn under_threshold_expanded_shows_every_row() {
        let html = TableRenderer::new()
            .render(&formats_table(3), RowVisibility::Expanded)
            .unwrap();

        assert!(!html.contains("<tr hidden>"));
        assert_eq!(html.matches("reveal-control").count(), 1);
    }

    #[test]
    fn control_label_without_a_name_omits_the_noun() {
        let mut table = formats_table(8);
        table.name = None;

        let html = TableRenderer::new()
            .render(&table, RowVisibility::Collapsed)
            .unwrap();

        assert!(html.contains(">Show all 8</button>"));
    }

    #[test]
    fn ids_are_deterministic_across_renders() {
        let renderer = TableRenderer::new();
        let table = formats_table(8);

        let a = renderer.render(&table, RowVisibility::Collapsed).unwrap();
        let b = renderer.render(&table, RowVisibility::Collapsed).unwrap();

        assert_eq!(a, b);
        assert!(a.contains(r#"id="summary-formats""#));
    }

    #[test]
    fn intent_maps_to_the_palette_color() {
        let mut table = formats_table(1);
        table.rows[0][0] = Cell::text("Available online").with_intent(Intent::Success);

        let html = TableRenderer::new()
            .render(&table, RowVisibility::Collapsed)
            .unwrap();

        let palette = Palette::default();
        assert!(html.contains(&format!(r#"<td style="color: {}">"#, palette.success)));
    }

    #[test]
    fn anchor_delegate_output_is_embedded_verbatim() {
        let mut table = formats_table(1);
        table.rows[0][1] = Cell {
            text: "Holdings".to_string(),
            to: Some("/catalog/1".to_string()),
            ..Cell::default()
        };

        let renderer = TableRenderer::new()
            .with_anchor(|c: &Cell| format!("<x-link to=\"{}\">{}</x-link>", c.to.as_deref().unwrap(), c.text));

        let html = renderer.render(&table, RowVisibility::Collapsed).unwrap();
        assert!(html.contains(r#"<x-link to="/catalog/1">Holdings</x-link>"#));
    }

    #[test]
    fn deserializes_a_full_table_from_yaml() {
        let yaml = r#"
headings: [Format, Link]
caption: Current issues
name: formats
notes:
  - Ask at the desk for older issues
rows:
  - - text: PDF
    - text: Download
      href: /f.pdf
  - - text: Print
      intent: warning
    - text: Request
      to: /request/1
"#;

        let table: Table = serde_yaml::from_str(yaml).unwrap();
        table.validate().unwrap();

        assert_eq!(table.headings.len(), 2);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][0].intent, Intent::Warning);
        assert_eq!(table.rows[1][1].to.as_deref(), Some("/request/1"));
    }
}
