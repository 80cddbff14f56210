//! Static documentation site builder for the carrel design system.

pub mod assets;
pub mod builder;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use templates::{NavItem, PageContext, TemplateEngine, TocEntry};
