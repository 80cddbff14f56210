//! Page sourcing for the carrel documentation site.
//!
//! Parses markdown pages with YAML frontmatter, extracts fenced demo blocks
//! (YAML component definitions rendered as live previews), builds a table of
//! contents, and loads the side-nav ordering data.

pub mod demoblock;
pub mod frontmatter;
pub mod navdata;
pub mod parser;

pub use demoblock::{BlockMode, DemoBlock, Language};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use navdata::{load_nav_data, NavDataError, NavEntry};
pub use parser::{parse_page, ParseError, ParsedPage, TocEntry};
