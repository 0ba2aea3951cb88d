//! Build command orchestration.

use anyhow::{Result, bail};

use crate::{
    config::ProjectConfig,
    debug, log,
    pipeline::{BuildReport, run_build},
    utils::plural_count,
};

/// Run the full pipeline and print a summary.
///
/// Fails after the batch completes if any document failed.
pub fn build_library(config: &ProjectConfig) -> Result<BuildReport> {
    if let Some(path) = &config.config_path {
        log!("build"; "using {}", path.display());
    }
    log!(
        "build"; "{} -> {}",
        config.build.input.display(),
        config.build.output.display()
    );

    let report = run_build(&config.build)?;
    print_summary(&report);

    let failures = report.failures().count();
    if failures > 0 {
        bail!(
            "{} failed ({} processed)",
            plural_count(failures, "file"),
            report.processed()
        );
    }

    log!(
        "done"; "{} processed, {} with color maps",
        plural_count(report.processed(), "file"),
        plural_count(report.colors.len(), "document")
    );
    Ok(report)
}

fn print_summary(report: &BuildReport) {
    for category in &report.categories {
        if category.skipped {
            continue;
        }
        debug!(
            "build"; "{} [{}]: {} processed, {} failed",
            category.name,
            category.mode.as_str(),
            category.processed,
            category.failures.len()
        );
    }

    for (name, map) in report.colors.iter() {
        let slots: Vec<_> = map.iter().map(|(slot, color)| format!("{slot}={color}")).collect();
        debug!("colors"; "{}: {}", name, slots.join(", "));
    }
}
