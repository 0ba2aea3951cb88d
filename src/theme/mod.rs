//! Color extraction and CSS variable substitution for themeable SVGs.
//!
//! # Architecture
//!
//! ```text
//! SVG text
//!     │
//!     ▼
//!  ┌──────┐
//!  │ scan │ ──► fill/stroke occurrences in document order
//!  └──┬───┘
//!     ▼
//!  ┌──────┐
//!  │ slot │ ──► canonical color -> `fill`, `fill2`, `stroke`, ...
//!  └──┬───┘
//!     ▼
//!  ┌─────────┐
//!  │ rewrite │ ──► fill="var(--fill, #ff0000)"
//!  └─────────┘
//! ```
//!
//! The transform is pure and keeps no state between documents.

mod normalize;
mod rewrite;
mod scan;
mod slot;

pub use scan::scan_color_attrs;
pub use slot::ColorMap;

use rewrite::rewrite_attrs;
use slot::assign_slots;

use crate::debug;

/// Result of theming one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedSvg {
    pub content: String,
    pub color_map: ColorMap,
}

/// Replace literal colors in `svg` with CSS variables.
///
/// `name` is only used for log output.
pub fn theme_svg(name: &str, svg: &str) -> ThemedSvg {
    let attrs = scan_color_attrs(svg);
    let (color_map, substitutions) = assign_slots(&attrs);

    for sub in &substitutions {
        let action = if sub.reused { "reuse" } else { "new" };
        debug!("theme"; "{name}: {action} {} -> var(--{})", &svg[sub.span.clone()], sub.slot);
    }

    ThemedSvg {
        content: rewrite_attrs(svg, &substitutions),
        color_map,
    }
}
