//! Count formatting for log messages.

/// Format count with noun, adding `s` unless the count is one
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "document")` -> `"1 document"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
