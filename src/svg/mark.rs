//! Marking embedded raster images for downstream replacement.

use regex::Regex;
use std::sync::LazyLock;

static IMAGE_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<image([^>]*)href="([^"]+)""#).unwrap());

/// Turn `<image ... href="x"` into `<image ... data-replaceable="x"`.
///
/// Component templates use the marker to swap in a user-supplied image.
pub fn mark_images(content: &str) -> String {
    IMAGE_HREF
        .replace_all(content, r#"<image${1}data-replaceable="${2}""#)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_images() {
        let svg = r#"<svg><image width="10" href="photo.png"/></svg>"#;
        assert_eq!(
            mark_images(svg),
            r#"<svg><image width="10" data-replaceable="photo.png"/></svg>"#
        );
    }

    #[test]
    fn test_mark_images_ignores_other_elements() {
        let svg = r##"<svg><use href="#icon"/></svg>"##;
        assert_eq!(mark_images(svg), svg);
    }
}
