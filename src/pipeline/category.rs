//! Category processing: one input directory, one color mode.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

use super::{AllColorMaps, Document, DocumentContext, DocumentError, process_document};
use crate::config::{BuildConfig, ColorMode};
use crate::utils::plural_count;
use crate::{debug, log};

/// Name of the per-category color map directory.
pub const COLORS_DIR: &str = "colors";

/// Outcome of one category.
#[derive(Debug)]
pub struct CategoryReport {
    pub name: String,
    pub mode: ColorMode,
    /// Input directory did not exist.
    pub skipped: bool,
    pub processed: usize,
    pub failures: Vec<DocumentError>,
}

impl CategoryReport {
    fn new(name: &str, mode: ColorMode) -> Self {
        Self {
            name: name.to_string(),
            mode,
            skipped: false,
            processed: 0,
            failures: Vec::new(),
        }
    }
}

/// Process every `*.svg` directly inside `<input>/<name>`.
///
/// Documents are transformed in parallel; color maps are merged into
/// `colors` afterwards in file-name order. Per-document failures are logged
/// and recorded. Errors setting up the output directories are returned.
pub fn process_category(
    build: &BuildConfig,
    name: &str,
    mode: ColorMode,
    colors: &mut AllColorMaps,
) -> Result<CategoryReport> {
    let mut report = CategoryReport::new(name, mode);
    let input_dir = build.input.join(name);
    let output_dir = build.output.join(name);

    if !input_dir.is_dir() {
        log!("warning"; "{}: input directory `{}` not found, skipping", name, input_dir.display());
        report.skipped = true;
        return Ok(report);
    }

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory `{}`", output_dir.display()))?;

    let colors_dir = output_dir.join(COLORS_DIR);
    if mode.extracts_colors() {
        fs::create_dir_all(&colors_dir).with_context(|| {
            format!("Failed to create colors directory `{}`", colors_dir.display())
        })?;
    }

    let documents = collect_documents(&input_dir)?;
    log!("build"; "{}: {} ({})", name, plural_count(documents.len(), "file"), mode.as_str());

    let ctx = DocumentContext {
        mode,
        optimize: mode.optimize_options(build.minify),
        mark_images: build.mark_images,
        output_dir: &output_dir,
        colors_dir: mode.extracts_colors().then_some(colors_dir.as_path()),
    };

    let results: Vec<_> = documents
        .par_iter()
        .map(|doc| (doc, process_document(doc, &ctx)))
        .collect();

    for (doc, result) in results {
        match result {
            Ok(map) => {
                report.processed += 1;
                debug!("build"; "{}/{} done", name, doc.file_name());
                if map.is_empty() {
                    continue;
                }
                if colors.insert(doc.name.clone(), map).is_some() {
                    log!("warning"; "color map for `{}` replaced by {}/{}", doc.name, name, doc.file_name());
                }
            }
            Err(err) => {
                log!("error"; "{}", err.detail());
                report.failures.push(err);
            }
        }
    }

    Ok(report)
}

/// SVG files directly inside `dir`, sorted by file name.
fn collect_documents(dir: &Path) -> Result<Vec<Document>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory `{}`", dir.display()))?;

    let mut documents: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(Document::from_path)
        .collect();
    documents.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn build_config(root: &Path, categories: &[(&str, ColorMode)]) -> BuildConfig {
        BuildConfig {
            input: root.join("svg"),
            output: root.join("optimized"),
            categories: categories
                .iter()
                .map(|(name, mode)| (name.to_string(), *mode))
                .collect::<BTreeMap<_, _>>(),
            ..BuildConfig::default()
        }
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_collect_documents_sorted_svg_only() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("b.svg"), "<svg/>");
        write(&dir.path().join("a.svg"), "<svg/>");
        write(&dir.path().join("notes.txt"), "");
        fs::create_dir_all(dir.path().join("nested.svg")).unwrap();

        let names: Vec<_> = collect_documents(dir.path())
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_process_themed_category() {
        let dir = TempDir::new().unwrap();
        let build = build_config(dir.path(), &[("graphic", ColorMode::Themed)]);
        write(
            &build.input.join("graphic/hero.svg"),
            r##"<svg><path fill="#111"/><path fill="#222"/></svg>"##,
        );
        write(&build.input.join("graphic/blank.svg"), r#"<svg fill="none"/>"#);

        let mut colors = AllColorMaps::new();
        let report = process_category(&build, "graphic", ColorMode::Themed, &mut colors).unwrap();

        assert_eq!(report.processed, 2);
        assert!(report.failures.is_empty());
        assert_eq!(colors.len(), 1);
        assert_eq!(colors.get("hero").and_then(|m| m.get("fill2")), Some("#222"));

        let out = build.output.join("graphic");
        assert!(out.join("hero.svg").exists());
        assert!(out.join("blank.svg").exists());
        assert!(out.join("colors/hero-colors.json").exists());
        assert!(!out.join("colors/blank-colors.json").exists());
    }

    #[test]
    fn test_process_mono_category_has_no_colors_dir() {
        let dir = TempDir::new().unwrap();
        let build = build_config(dir.path(), &[("icon", ColorMode::Mono)]);
        write(&build.input.join("icon/star.svg"), r##"<svg><path fill="#f00"/></svg>"##);

        let mut colors = AllColorMaps::new();
        let report = process_category(&build, "icon", ColorMode::Mono, &mut colors).unwrap();

        assert_eq!(report.processed, 1);
        assert!(colors.is_empty());
        let out = build.output.join("icon");
        assert!(!out.join(COLORS_DIR).exists());
        assert_eq!(
            fs::read_to_string(out.join("star.svg")).unwrap(),
            r#"<svg><path fill="currentColor"/></svg>"#
        );
    }

    #[test]
    fn test_missing_input_dir_is_skipped() {
        let dir = TempDir::new().unwrap();
        let build = build_config(dir.path(), &[("graphic", ColorMode::Themed)]);

        let mut colors = AllColorMaps::new();
        let report = process_category(&build, "graphic", ColorMode::Themed, &mut colors).unwrap();
        assert!(report.skipped);
        assert_eq!(report.processed, 0);
        assert!(!build.output.join("graphic").exists());
    }

    #[test]
    fn test_failed_document_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        let build = build_config(dir.path(), &[("graphic", ColorMode::Themed)]);
        write(&build.input.join("graphic/a.svg"), r##"<svg fill="#000"/>"##);
        write(&build.input.join("graphic/b.svg"), r##"<svg fill="#111"/>"##);
        write(&build.input.join("graphic/c.svg"), r##"<svg stroke="#fff"/>"##);
        // A directory where b.svg should be written makes that write fail
        fs::create_dir_all(build.output.join("graphic/b.svg")).unwrap();

        let mut colors = AllColorMaps::new();
        let report = process_category(&build, "graphic", ColorMode::Themed, &mut colors).unwrap();

        assert_eq!(report.processed, 2);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], DocumentError::Write(..)));
        assert!(colors.get("a").is_some());
        assert!(colors.get("b").is_none());
        assert!(colors.get("c").is_some());

        let colors_dir = build.output.join("graphic").join(COLORS_DIR);
        assert!(colors_dir.join("a-colors.json").exists());
        assert!(!colors_dir.join("b-colors.json").exists());
    }
}
