//! Color value normalization.
//!
//! `rgb()`/`rgba()` values become lowercase hex; everything else passes
//! through untouched. Only values that end up starting with `#` get a slot.

use regex::Regex;
use std::borrow::Cow;
use std::fmt::Write;
use std::sync::LazyLock;

/// Comma-separated `rgb()`/`rgba()` with integer or percentage channels.
static RGB_FUNC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)rgba?\(\s*([\d.]+%?)\s*,\s*([\d.]+%?)\s*,\s*([\d.]+%?)(?:\s*,\s*([\d.]+%?))?\s*\)",
    )
    .unwrap()
});

/// Convert `rgb(...)`/`rgba(...)` to `#rrggbb` or `#rrggbbaa`.
///
/// Returns `None` when the value does not match the functional syntax or a
/// channel is not a number.
pub fn rgb_to_hex(color: &str) -> Option<String> {
    let caps = RGB_FUNC.captures(color)?;

    let r = parse_channel(&caps[1])?;
    let g = parse_channel(&caps[2])?;
    let b = parse_channel(&caps[3])?;
    let alpha = match caps.get(4) {
        Some(m) => parse_alpha(m.as_str())?,
        None => 1.0,
    };

    let mut hex = format!("#{r:02x}{g:02x}{b:02x}");
    if alpha < 1.0 {
        let a = (alpha * 255.0).round() as u8;
        write!(hex, "{a:02x}").ok()?;
    }
    Some(hex)
}

/// Canonical form of a raw attribute value, or `None` if it is not slottable.
///
/// # Examples
///
/// - `rgb(255, 0, 0)` -> `Some("#ff0000")`
/// - `#FF0000` -> `Some("#FF0000")` (hex is kept as written)
/// - `rgb(bad)` -> `None`
/// - `red` -> `None`
pub fn canonical_color(value: &str) -> Option<Cow<'_, str>> {
    let canonical = if starts_with_ignore_case(value, "rgb") {
        rgb_to_hex(value).map_or(Cow::Borrowed(value), Cow::Owned)
    } else {
        Cow::Borrowed(value)
    };
    canonical.starts_with('#').then_some(canonical)
}

#[inline]
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Integer channels truncate, percentage channels scale by 2.55 and round.
/// Both clamp to [0, 255].
fn parse_channel(raw: &str) -> Option<u8> {
    let value = match raw.strip_suffix('%') {
        Some(pct) => (pct.parse::<f64>().ok()? * 2.55).round(),
        None => raw.parse::<f64>().ok()?.trunc(),
    };
    Some(value.clamp(0.0, 255.0) as u8)
}

/// Alpha as a fraction in [0, 1]; percentages are divided by 100.
fn parse_alpha(raw: &str) -> Option<f64> {
    let value = match raw.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => raw.parse::<f64>().ok()?,
    };
    Some(value.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex_integer_channels() {
        assert_eq!(rgb_to_hex("rgb(255,0,0)").as_deref(), Some("#ff0000"));
        assert_eq!(rgb_to_hex("rgb( 18 , 52 , 86 )").as_deref(), Some("#123456"));
        assert_eq!(rgb_to_hex("RGB(0,0,255)").as_deref(), Some("#0000ff"));
    }

    #[test]
    fn test_rgb_to_hex_alpha() {
        // 0.5 * 255 = 127.5 rounds to 128
        assert_eq!(rgb_to_hex("rgba(255,0,0,0.5)").as_deref(), Some("#ff000080"));
        assert_eq!(rgb_to_hex("rgba(255,0,0,0)").as_deref(), Some("#ff000000"));
        assert_eq!(rgb_to_hex("rgba(255,0,0,1)").as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_rgb_to_hex_percentage_channels() {
        assert_eq!(rgb_to_hex("rgb(100%,0%,0%)").as_deref(), Some("#ff0000"));
        assert_eq!(rgb_to_hex("rgb(0%,100%,0%)").as_deref(), Some("#00ff00"));
    }

    #[test]
    fn test_rgb_to_hex_clamps_out_of_range() {
        assert_eq!(rgb_to_hex("rgb(300,0,0)").as_deref(), Some("#ff0000"));
        assert_eq!(rgb_to_hex("rgb(150%,0,0)").as_deref(), Some("#ff0000"));
        assert_eq!(rgb_to_hex("rgba(0,0,0,2)").as_deref(), Some("#000000"));
        assert_eq!(rgb_to_hex("rgba(0,0,0,50%)").as_deref(), Some("#00000080"));
    }

    #[test]
    fn test_rgb_to_hex_truncates_fractional_integer_channels() {
        assert_eq!(rgb_to_hex("rgb(12.9,0,0)").as_deref(), Some("#0c0000"));
    }

    #[test]
    fn test_rgb_to_hex_malformed() {
        assert_eq!(rgb_to_hex("rgb(bad)"), None);
        assert_eq!(rgb_to_hex("rgb(1,2)"), None);
        assert_eq!(rgb_to_hex("rgb(.,0,0)"), None);
        assert_eq!(rgb_to_hex("#ff0000"), None);
    }

    #[test]
    fn test_canonical_color() {
        assert_eq!(canonical_color("#FFF").as_deref(), Some("#FFF"));
        assert_eq!(canonical_color("rgb(255,255,255)").as_deref(), Some("#ffffff"));
        assert_eq!(canonical_color("rgb(bad)"), None);
        assert_eq!(canonical_color("red"), None);
        assert_eq!(canonical_color("url(#grad)"), None);
    }

    #[test]
    fn test_canonical_color_dedups_across_syntax() {
        assert_eq!(
            canonical_color("rgb(100%,0%,0%)"),
            canonical_color("rgb(255,0,0)")
        );
    }
}
