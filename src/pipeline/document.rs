//! Single document processing: read, transform, write.

use std::fs;
use std::path::{Path, PathBuf};

use super::DocumentError;
use crate::config::ColorMode;
use crate::svg::{OptimizeOptions, mark_images, optimize_svg};
use crate::theme::{ColorMap, ThemedSvg, theme_svg};
use crate::{debug, log};

/// Settings shared by every document in a category.
#[derive(Debug, Clone)]
pub struct DocumentContext<'a> {
    pub mode: ColorMode,
    pub optimize: OptimizeOptions,
    pub mark_images: bool,
    pub output_dir: &'a Path,
    /// Destination for `<name>-colors.json` (themed categories only).
    pub colors_dir: Option<&'a Path>,
}

/// An input SVG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File stem, used for the color map and aggregate keys.
    pub name: String,
    pub source: PathBuf,
}

impl Document {
    /// Build from a path ending in `.svg`; other paths yield `None`.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        if path.extension()? != "svg" {
            return None;
        }
        let name = path.file_stem()?.to_str()?.to_string();
        Some(Self { name, source: path })
    }

    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }
}

/// Transform document text for its category. Pure.
///
/// Order: image marking, color extraction (themed only), optimization.
pub fn transform_document(name: &str, content: &str, ctx: &DocumentContext<'_>) -> ThemedSvg {
    let content = if ctx.mark_images {
        mark_images(content)
    } else {
        content.to_string()
    };

    let themed = if ctx.mode.extracts_colors() {
        theme_svg(name, &content)
    } else {
        ThemedSvg {
            content,
            color_map: ColorMap::new(),
        }
    };

    ThemedSvg {
        content: optimize_svg(&themed.content, &ctx.optimize),
        color_map: themed.color_map,
    }
}

/// Process one file and write its artifacts.
///
/// Writes the optimized SVG, then `<name>-colors.json` when the color map is
/// non-empty. A failed SVG write leaves no color map behind. Returns the
/// color map on success.
pub fn process_document(
    doc: &Document,
    ctx: &DocumentContext<'_>,
) -> Result<ColorMap, DocumentError> {
    let content = fs::read_to_string(&doc.source)
        .map_err(|err| DocumentError::Read(doc.source.clone(), err))?;
    debug!("read"; "{} ({} bytes)", doc.source.display(), content.len());

    let themed = transform_document(&doc.name, &content, ctx);

    let output = ctx.output_dir.join(doc.file_name());
    fs::write(&output, &themed.content).map_err(|err| DocumentError::Write(output.clone(), err))?;
    debug!("write"; "{} ({} bytes)", output.display(), themed.content.len());

    if let Some(colors_dir) = ctx.colors_dir
        && !themed.color_map.is_empty()
    {
        let json = serde_json::to_string_pretty(&themed.color_map)
            .map_err(|err| DocumentError::Encode(doc.name.clone(), err))?;
        let path = colors_dir.join(format!("{}-colors.json", doc.name));
        fs::write(&path, json).map_err(|err| DocumentError::Write(path.clone(), err))?;
        log!("colors"; "{}-colors.json ({} colors)", doc.name, themed.color_map.len());
    }

    Ok(themed.color_map)
}
