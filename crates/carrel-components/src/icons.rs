//! Icon capability.
//!
//! The table never draws glyphs itself; it asks an [`IconSource`] for markup
//! by name. The builtin set covers the handful of icons the documentation
//! site uses. Anything else resolves to `None` and the cell renders without
//! a prefix.

/// Resolves an icon name to inline markup.
pub trait IconSource: Send + Sync {
    fn glyph(&self, name: &str) -> Option<String>;
}

/// Icon source that resolves nothing.
pub struct NoIcons;

impl IconSource for NoIcons {
    fn glyph(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Small inline-SVG icon set shipped with the documentation site.
pub struct BuiltinIcons;

impl IconSource for BuiltinIcons {
    fn glyph(&self, name: &str) -> Option<String> {
        let path = match name {
            "link" => "M3.9 12c0-1.71 1.39-3.1 3.1-3.1h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-1.9H7c-1.71 0-3.1-1.39-3.1-3.1zM8 13h8v-2H8v2zm9-6h-4v1.9h4c1.71 0 3.1 1.39 3.1 3.1s-1.39 3.1-3.1 3.1h-4V17h4c2.76 0 5-2.24 5-5s-2.24-5-5-5z",
            "check" => "M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z",
            "warning" => "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z",
            "error" => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z",
            "book" => "M18 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM6 4h5v8l-2.5-1.5L6 12V4z",
            "chevron-down" => "M7.41 8.59L12 13.17l4.59-4.58L18 10l-6 6-6-6 1.41-1.41z",
            _ => return None,
        };

        Some(format!(
            r#"<svg viewBox="0 0 24 24" width="16" height="16" aria-hidden="true" focusable="false"><path fill="currentColor" d="{}"/></svg>"#,
            path
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_resolves_known_names() {
        assert!(BuiltinIcons.glyph("link").is_some());
        assert!(BuiltinIcons.glyph("check").is_some());
        assert!(BuiltinIcons.glyph("no-such-icon").is_none());
    }

    #[test]
    fn glyphs_are_hidden_from_assistive_tech() {
        let svg = BuiltinIcons.glyph("warning").unwrap();
        assert!(svg.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn no_icons_resolves_nothing() {
        assert!(NoIcons.glyph("link").is_none());
    }
}
