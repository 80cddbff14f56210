//! Fenced code block extraction.
//!
//! Pages embed component demos as fenced YAML blocks tagged `demo`. The
//! builder deserializes the YAML into a component definition, renders a live
//! preview above the source listing, and leaves every other block as plain
//! code.

/// Language of a fenced code block, from the fence info string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Yaml,
    Json,
    Html,
    Css,
    Bash,
    #[default]
    Unknown,
}

impl Language {
    /// Parse the language from a fence info string like `yaml demo`.
    pub fn from_info(info: &str) -> Self {
        let lang = info.split_whitespace().next().unwrap_or("");
        match lang.to_lowercase().as_str() {
            "yaml" | "yml" => Self::Yaml,
            "json" => Self::Json,
            "html" => Self::Html,
            "css" => Self::Css,
            "bash" | "sh" | "shell" => Self::Bash,
            _ => Self::Unknown,
        }
    }

    /// Whether a block in this language can carry a component definition.
    pub fn is_renderable(&self) -> bool {
        matches!(self, Self::Yaml)
    }
}

/// How a fenced block is presented on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    /// Render a live preview above the source listing.
    Demo,
    /// Syntax highlight only (default).
    #[default]
    Source,
}

impl BlockMode {
    pub fn from_info(info: &str) -> Self {
        if info.to_lowercase().contains("demo") {
            Self::Demo
        } else {
            Self::Source
        }
    }
}

/// A fenced code block extracted from a page.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoBlock {
    /// Identifier unique within the page (format: block-{line_number}).
    pub id: String,

    pub language: Language,
    pub mode: BlockMode,

    /// Source inside the fence.
    pub source: String,

    /// Line the fence starts on (1-indexed).
    pub line_number: usize,
}

impl DemoBlock {
    pub fn new(language: Language, mode: BlockMode, source: String, line_number: usize) -> Self {
        Self {
            id: format!("block-{}", line_number),
            language,
            mode,
            source,
            line_number,
        }
    }

    /// Whether this block should be rendered as a live demo.
    pub fn is_demo(&self) -> bool {
        self.mode == BlockMode::Demo && self.language.is_renderable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language() {
        assert_eq!(Language::from_info("yaml demo"), Language::Yaml);
        assert_eq!(Language::from_info("yml"), Language::Yaml);
        assert_eq!(Language::from_info("json"), Language::Json);
        assert_eq!(Language::from_info("sh"), Language::Bash);
        assert_eq!(Language::from_info("tsx"), Language::Unknown);
    }

    #[test]
    fn parses_mode() {
        assert_eq!(BlockMode::from_info("yaml demo"), BlockMode::Demo);
        assert_eq!(BlockMode::from_info("yaml"), BlockMode::Source);
        assert_eq!(BlockMode::from_info("html"), BlockMode::Source);
    }

    #[test]
    fn only_yaml_demo_blocks_are_demos() {
        let yaml_demo = DemoBlock::new(Language::Yaml, BlockMode::Demo, String::new(), 1);
        assert!(yaml_demo.is_demo());

        let yaml_source = DemoBlock::new(Language::Yaml, BlockMode::Source, String::new(), 1);
        assert!(!yaml_source.is_demo());

        let html_demo = DemoBlock::new(Language::Html, BlockMode::Demo, String::new(), 1);
        assert!(!html_demo.is_demo());
    }

    #[test]
    fn block_ids_come_from_line_numbers() {
        let block = DemoBlock::new(Language::Yaml, BlockMode::Demo, String::new(), 12);
        assert_eq!(block.id, "block-12");
    }
}
