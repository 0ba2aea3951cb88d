//! Single-file color extraction.

use anyhow::{Context, Result};
use std::fs;
use std::io::{Write, stdout};

use super::ExtractArgs;
use crate::{debug, theme::theme_svg};

/// Theme one SVG and emit the rewritten text and its color map.
///
/// Without `--output`/`--map` both go to stdout, SVG first.
pub fn extract_file(args: &ExtractArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read `{}`", args.file.display()))?;

    let name = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let themed = theme_svg(&name, &content);
    let json = serde_json::to_string_pretty(&themed.color_map)?;
    debug!("extract"; "{}: {} colors", name, themed.color_map.len());

    let mut out = stdout().lock();

    match &args.output {
        Some(path) => fs::write(path, &themed.content)
            .with_context(|| format!("Failed to write `{}`", path.display()))?,
        None => writeln!(out, "{}", themed.content)?,
    }

    match &args.map {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write `{}`", path.display()))?
        }
        None => writeln!(out, "{json}")?,
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_extract_file_writes_outputs() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("badge.svg");
        fs::write(&file, r##"<svg><path fill="#0af" stroke="rgb(0,0,0)"/></svg>"##).unwrap();

        let args = ExtractArgs {
            file,
            output: Some(dir.path().join("out.svg")),
            map: Some(dir.path().join("out.json")),
            verbose: false,
        };
        extract_file(&args).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("out.svg")).unwrap(),
            r#"<svg><path fill="var(--fill, #0af)" stroke="var(--stroke, #000000)"/></svg>"#
        );
        let map: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("out.json")).unwrap())
                .unwrap();
        assert_eq!(map["fill"], "#0af");
        assert_eq!(map["stroke"], "#000000");
    }

    #[test]
    fn test_extract_missing_file() {
        let args = ExtractArgs {
            file: PathBuf::from("/definitely/not/here.svg"),
            output: None,
            map: None,
            verbose: false,
        };
        let err = extract_file(&args).unwrap_err();
        assert!(err.to_string().contains("here.svg"));
    }
}
