//! Design tokens: named colors and the intent lookup.

use crate::cell::Intent;

/// Named colors consumed by the table renderer and the asset pipeline.
///
/// The defaults are the documentation site's own tokens; consumers embedding
/// the components elsewhere can supply their own.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Row separator and heading underline.
    pub grey_400: String,
    /// Column heading text.
    pub grey_600: String,
    /// Body text, also used for `default` intent cells.
    pub text: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    /// Link and accent color.
    pub brand: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grey_400: "#e5e9ed".to_string(),
            grey_600: "#637381".to_string(),
            text: "#212b36".to_string(),
            success: "#1d7c4d".to_string(),
            warning: "#9a6700".to_string(),
            error: "#cc2936".to_string(),
            brand: "#126dc1".to_string(),
        }
    }
}

impl Palette {
    /// Map a cell intent to its display color.
    pub fn intent_color(&self, intent: Intent) -> &str {
        match intent {
            Intent::Default => &self.text,
            Intent::Success => &self.success,
            Intent::Warning => &self.warning,
            Intent::Error => &self.error,
        }
    }
}
