//! Lightweight SVG optimization.
//!
//! Text-level only: strips prolog and comments, collapses inter-tag
//! whitespace outside `<text>`, and optionally flattens paint colors to
//! `currentColor`.

use regex::Regex;
use std::sync::LazyLock;

use crate::theme::scan_color_attrs;

static XML_DECL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<\?xml[^>]*\?>").unwrap());
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static DOCTYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<!DOCTYPE[^>]*>").unwrap());
static INTER_TAG_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());
static TEXT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<text\b.*?</text\s*>").unwrap());
static PRESERVE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"xml:space\s*=\s*["']preserve["']"#).unwrap());

/// How the optimizer treats `fill`/`stroke` colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorConversion {
    /// Leave color attributes alone. Required for themed documents so the
    /// inserted `var()` references survive.
    #[default]
    Preserve,
    /// Replace literal colors with `currentColor` (monochrome icons).
    CurrentColor,
}

/// Options for SVG optimization
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Strip prolog/comments and collapse whitespace.
    pub minify: bool,
    pub colors: ColorConversion,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            minify: true,
            colors: ColorConversion::Preserve,
        }
    }
}

/// Optimize SVG text according to `options`.
pub fn optimize_svg(content: &str, options: &OptimizeOptions) -> String {
    let content = match options.colors {
        ColorConversion::Preserve => content.to_string(),
        ColorConversion::CurrentColor => to_current_color(content),
    };

    if options.minify {
        minify(&content)
    } else {
        content
    }
}

fn minify(content: &str) -> String {
    let content = XML_DECL.replace_all(content, "");
    let content = DOCTYPE.replace_all(&content, "");
    let content = COMMENT.replace_all(&content, "");
    collapse_whitespace(&content).trim().to_string()
}

/// Remove whitespace between tags, except inside `<text>` elements where it
/// is rendered. Documents declaring `xml:space="preserve"` are left as is.
fn collapse_whitespace(content: &str) -> String {
    if PRESERVE_SPACE.is_match(content) {
        return content.to_string();
    }

    // Each collapsed segment keeps the text element's opening `<` and closing
    // `>` so whitespace right outside the element still collapses.
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    for text in TEXT_ELEMENT.find_iter(content) {
        let (start, end) = (text.start() + 1, text.end() - 1);
        out.push_str(&INTER_TAG_WS.replace_all(&content[cursor..start], "><"));
        out.push_str(&content[start..end]);
        cursor = end;
    }
    out.push_str(&INTER_TAG_WS.replace_all(&content[cursor..], "><"));
    out
}

/// Rewrite every literal paint color to `currentColor`.
///
/// `none`, `currentColor` (in any case), `var(...)` and `url(...)` references
/// are kept.
fn to_current_color(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for attr in scan_color_attrs(content) {
        if is_keyword(attr.value) || is_reference(attr.value) {
            continue;
        }
        out.push_str(&content[cursor..attr.span.start]);
        out.push_str(attr.kind.as_str());
        out.push_str("=\"currentColor\"");
        cursor = attr.span.end;
    }
    out.push_str(&content[cursor..]);
    out
}

#[inline]
fn is_keyword(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("currentColor")
}

#[inline]
fn is_reference(value: &str) -> bool {
    let value = value.trim_start();
    ["var(", "url("].iter().any(|prefix| {
        value
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
