//! Batch pipeline over all configured categories.
//!
//! ```text
//! <input>/<category>/*.svg
//!         │  per document, in parallel
//!         ▼
//!   mark images → theme (themed only) → optimize
//!         │
//!         ├──► <output>/<category>/<name>.svg
//!         └──► <output>/<category>/colors/<name>-colors.json
//!
//! after all categories:
//!   AllColorMaps ──► <output>/<aggregate>/colors/all-colors.json
//! ```

mod category;
mod colors;
mod document;
mod error;

pub use category::CategoryReport;
pub use colors::AllColorMaps;
pub use error::DocumentError;

use category::{COLORS_DIR, process_category};
use document::{Document, DocumentContext, process_document};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::log;

/// File name of the aggregate color map.
pub const ALL_COLORS_FILE: &str = "all-colors.json";

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub categories: Vec<CategoryReport>,
    pub colors: AllColorMaps,
    /// Where the aggregate file was written, if any.
    pub all_colors_path: Option<PathBuf>,
}

impl BuildReport {
    pub fn processed(&self) -> usize {
        self.categories.iter().map(|c| c.processed).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DocumentError> {
        self.categories.iter().flat_map(|c| c.failures.iter())
    }
}

/// Run every category, then write the aggregate color map.
///
/// Categories run in name order. The accumulator starts empty on each call,
/// so a run never sees maps from a previous one.
pub fn run_build(build: &BuildConfig) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    for (name, mode) in &build.categories {
        let category = process_category(build, name, *mode, &mut report.colors)
            .with_context(|| format!("category `{name}` failed"))?;
        report.categories.push(category);
    }

    if !report.colors.is_empty()
        && let Some(aggregate) = build.aggregate_category()
    {
        report.all_colors_path = Some(write_all_colors(build, aggregate, &report.colors)?);
    }

    Ok(report)
}

fn write_all_colors(build: &BuildConfig, category: &str, colors: &AllColorMaps) -> Result<PathBuf> {
    let dir = build.output.join(category).join(COLORS_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create colors directory `{}`", dir.display()))?;

    let path = dir.join(ALL_COLORS_FILE);
    let json = colors.to_json().context("Failed to encode aggregate color map")?;
    fs::write(&path, json).with_context(|| format!("Failed to write `{}`", path.display()))?;

    log!("colors"; "{} ({} documents)", path.display(), colors.len());
    Ok(path)
}
