//! SVG text processing that runs around the color transform.
//!
//! - [`mark`]: tag embedded `<image href>` for replacement
//! - [`optimize`]: minification and optional `currentColor` flattening

mod mark;
mod optimize;

pub use mark::mark_images;
pub use optimize::{ColorConversion, OptimizeOptions, optimize_svg};
