//! Color attribute scanning (regex-level, no XML parsing).

use regex::Regex;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

/// `fill="..."` / `stroke="..."` in either quote style.
static COLOR_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\b(fill|stroke)=["']([^"']+)["']"#).unwrap());

/// Values that are never extracted or rewritten.
const EXCLUDED_VALUES: [&str; 2] = ["none", "currentColor"];

/// Paint attribute carrying a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    Fill,
    Stroke,
}

impl AttrKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }

    /// Parse an attribute name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("fill") {
            Some(Self::Fill)
        } else if name.eq_ignore_ascii_case("stroke") {
            Some(Self::Stroke)
        } else {
            None
        }
    }

    pub(super) const fn index(self) -> usize {
        match self {
            Self::Fill => 0,
            Self::Stroke => 1,
        }
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One color attribute occurrence inside an SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAttribute<'a> {
    pub kind: AttrKind,
    /// Raw attribute value as written in the source.
    pub value: &'a str,
    /// Byte range of the whole `kind="value"` attribute.
    pub span: Range<usize>,
}

/// Collect every color attribute in document order.
///
/// `none` and `currentColor` are skipped entirely.
pub fn scan_color_attrs(svg: &str) -> Vec<ColorAttribute<'_>> {
    COLOR_ATTR
        .captures_iter(svg)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let kind = AttrKind::from_name(caps.get(1)?.as_str())?;
            let value = caps.get(2)?.as_str();
            if EXCLUDED_VALUES.contains(&value) {
                return None;
            }
            Some(ColorAttribute {
                kind,
                value,
                span: whole.range(),
            })
        })
        .collect()
}
