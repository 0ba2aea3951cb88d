//! Attribute rewriting.

use super::slot::Substitution;

/// Splice `var()` references into `svg` at each substitution.
///
/// Substitutions must be in document order and non-overlapping, which is
/// what [`super::scan::scan_color_attrs`] produces. Bytes outside the
/// substituted spans are copied unchanged.
pub fn rewrite_attrs(svg: &str, substitutions: &[Substitution]) -> String {
    let mut out = String::with_capacity(svg.len() + substitutions.len() * 16);
    let mut cursor = 0;

    for sub in substitutions {
        out.push_str(&svg[cursor..sub.span.start]);
        out.push_str(&sub.attribute());
        cursor = sub.span.end;
    }
    out.push_str(&svg[cursor..]);
    out
}
