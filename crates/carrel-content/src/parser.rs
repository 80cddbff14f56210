//! Documentation page parser.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::demoblock::{BlockMode, DemoBlock, Language};
use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// A parsed documentation page.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Markdown content without the frontmatter
    pub content: String,

    /// Fenced code blocks, demos included
    pub blocks: Vec<DemoBlock>,

    /// Table of contents entries
    pub toc: Vec<TocEntry>,
}

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Errors that can occur when parsing a page.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Parse a documentation page.
///
/// Extracts frontmatter, fenced code blocks, and a table of contents from
/// the headings.
pub fn parse_page(source: &str) -> Result<ParsedPage, ParseError> {
    let (frontmatter, content) = extract_frontmatter(source)?;

    let mut blocks = Vec::new();
    let mut toc = Vec::new();

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options);

    // (info string, starting line)
    let mut current_block: Option<(String, usize)> = None;
    let mut current_heading: Option<(u8, String)> = None;
    let mut line_number = 1;

    // Offset line numbers by the frontmatter the parser never sees.
    let frontmatter_len = source.len() - content.len();
    let line_offset = source[..frontmatter_len].lines().count();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match &kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                current_block = Some((info, line_number + line_offset));
            }

            Event::Text(text) => {
                if let Some((ref info, start_line)) = current_block {
                    let language = Language::from_info(info);
                    let mode = BlockMode::from_info(info);
                    blocks.push(DemoBlock::new(language, mode, text.to_string(), start_line));
                } else if let Some((_, ref mut heading)) = current_heading {
                    heading.push_str(&text);
                }

                line_number += text.matches('\n').count();
            }

            Event::End(TagEnd::CodeBlock) => {
                current_block = None;
            }

            Event::Start(Tag::Heading { level, .. }) => {
                current_heading = Some((level as u8, String::new()));
            }

            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current_heading.take() {
                    let id = slugify(&title);
                    toc.push(TocEntry { title, id, level });
                }
            }

            Event::SoftBreak | Event::HardBreak => {
                line_number += 1;
            }

            _ => {}
        }
    }

    Ok(ParsedPage {
        frontmatter,
        content: content.to_string(),
        blocks,
        toc,
    })
}

/// Convert a heading to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
