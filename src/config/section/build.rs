//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! input = "svg"          # one sub-directory per category
//! output = "optimized"
//! minify = true
//! mark_images = true     # <image href> -> data-replaceable
//! aggregate = "graphic"  # where all-colors.json goes (default: first themed category)
//!
//! [build.categories]
//! graphic = "themed"     # colors -> CSS variables
//! icon = "mono"          # colors -> currentColor
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::svg::{ColorConversion, OptimizeOptions};

/// How a category's colors are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Extract colors into CSS variables and write color maps.
    Themed,
    /// Flatten colors to `currentColor`.
    Mono,
    /// Optimize only.
    Plain,
}

impl ColorMode {
    pub const fn extracts_colors(self) -> bool {
        matches!(self, Self::Themed)
    }

    /// Optimizer settings for this mode.
    pub fn optimize_options(self, minify: bool) -> OptimizeOptions {
        let colors = match self {
            Self::Mono => ColorConversion::CurrentColor,
            Self::Themed | Self::Plain => ColorConversion::Preserve,
        };
        OptimizeOptions { minify, colors }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Themed => "themed",
            Self::Mono => "mono",
            Self::Plain => "plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Source root; each category is a sub-directory.
    pub input: PathBuf,

    /// Output root; mirrors the category layout.
    pub output: PathBuf,

    /// Minify optimized SVGs.
    pub minify: bool,

    /// Rewrite `<image href>` to `data-replaceable` before processing.
    pub mark_images: bool,

    /// Category whose `colors/` directory receives `all-colors.json`.
    pub aggregate: Option<String>,

    /// Category name -> color mode.
    pub categories: BTreeMap<String, ColorMode>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input: "svg".into(),
            output: "optimized".into(),
            minify: true,
            mark_images: true,
            aggregate: None,
            categories: BTreeMap::from([
                ("graphic".to_string(), ColorMode::Themed),
                ("icon".to_string(), ColorMode::Mono),
            ]),
        }
    }
}

impl BuildConfig {
    /// Category that receives the aggregate color file.
    pub fn aggregate_category(&self) -> Option<&str> {
        self.aggregate.as_deref().or_else(|| {
            self.categories
                .iter()
                .find(|(_, mode)| mode.extracts_colors())
                .map(|(name, _)| name.as_str())
        })
    }

    /// Validate build configuration.
    ///
    /// # Checks
    ///
    /// - at least one category
    /// - category names are plain directory names
    /// - input and output differ
    /// - `aggregate` names a themed category
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.categories.is_empty() {
            diag.error("build.categories", "at least one category is required");
        }

        for name in self.categories.keys() {
            if !is_plain_dir_name(name) {
                diag.error(
                    format!("build.categories.{name}"),
                    "category must be a plain directory name",
                );
            }
        }

        if self.input == self.output {
            diag.error(
                "build.output",
                format!("output must differ from input `{}`", self.input.display()),
            );
        }

        if let Some(aggregate) = &self.aggregate {
            match self.categories.get(aggregate) {
                Some(mode) if mode.extracts_colors() => {}
                Some(mode) => diag.error(
                    "build.aggregate",
                    format!("`{aggregate}` is a {} category, expected themed", mode.as_str()),
                ),
                None => diag.error("build.aggregate", format!("unknown category `{aggregate}`")),
            }
        }
    }
}

fn is_plain_dir_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
