//! Unused-asset detection for server deployments.
//!
//! Peripheral to reachability analysis: collects every file under an asset
//! directory, scans the Java sources for quoted asset references, and
//! reports the difference so deploy packages can be trimmed.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

/// Quoted literals that look like asset paths, e.g. `"sprites/ash.png"`.
const ASSET_REFERENCE_PATTERN: &str =
    r#"["']([^"']+\.(?:png|jpg|jpeg|mp3|wav|ogg|atlas|json|txt))["']"#;

/// All files under `assets_dir`, as `/`-separated paths relative to it.
pub fn collect_asset_files(assets_dir: &Path) -> Result<BTreeSet<String>> {
    let mut assets = BTreeSet::new();
    for entry in WalkDir::new(assets_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(assets_dir) {
            assets.insert(relative.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(assets)
}

/// Every asset-looking string literal in the Java sources under
/// `source_dir`. Files are read in parallel; unreadable files are skipped.
pub fn collect_asset_references(source_dir: &Path) -> Result<BTreeSet<String>> {
    let pattern =
        Regex::new(ASSET_REFERENCE_PATTERN).context("compiling asset reference pattern")?;

    let java_files: Vec<PathBuf> = WalkDir::new(source_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path().is_file() && e.path().extension().and_then(|x| x.to_str()) == Some("java")
        })
        .map(|e| e.into_path())
        .collect();

    let references = java_files
        .par_iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .map(|content| {
            pattern
                .captures_iter(&content)
                .filter_map(|captures| captures.get(1).map(|m| m.as_str().to_string()))
                .collect::<BTreeSet<_>>()
        })
        .reduce(BTreeSet::new, |mut acc, set| {
            acc.extend(set);
            acc
        });

    Ok(references)
}

/// Assets present on disk but never referenced from the sources.
pub fn find_unused_assets(assets_dir: &Path, source_dir: &Path) -> Result<BTreeSet<String>> {
    let assets = collect_asset_files(assets_dir)?;
    let references = collect_asset_references(source_dir)?;
    log::info!(
        "{} assets on disk, {} referenced from sources",
        assets.len(),
        references.len()
    );
    Ok(assets.difference(&references).cloned().collect())
}

/// Write one asset path per line, sorted.
pub fn write_report(unused: &BTreeSet<String>, output: &Path) -> Result<()> {
    let mut file =
        fs::File::create(output).with_context(|| format!("creating {}", output.display()))?;
    for asset in unused {
        writeln!(file, "{asset}")?;
    }
    Ok(())
}
