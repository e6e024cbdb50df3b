// SPDX-License-Identifier: PMPL-1.0-or-later

//! Folder and asset migration: slug renames, Markdown canonicalization,
//! sequential image renames, and link rewriting.
//!
//! The slug map pairs original (often non-ASCII) folder names with their
//! permanent URL-safe slugs. Renames are conservative: an existing
//! destination folder is never merged into or overwritten — the rename is
//! skipped with a log line and the folder is processed under its current
//! name. Per-folder failures are logged and the run continues.

use crate::pipeline::{file_names, links, post_folders};
use crate::types::{is_canonical_image, is_image_file, CANONICAL_MARKDOWN};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Original folder name -> canonical slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlugMap {
    entries: HashMap<String, String>,
}

impl SlugMap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a slug map from JSON or YAML, picked by file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading slug map {}", path.display()))?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);
        let map = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing slug map {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing slug map {}", path.display()))?
        };
        Ok(map)
    }

    pub fn slug_for(&self, folder_name: &str) -> Option<&str> {
        self.entries.get(folder_name).map(String::as_str)
    }

    /// Build a map from literal name/slug pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Outcome of one migration run, for the summary line and for tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrateReport {
    pub folders_processed: usize,
    pub folders_renamed: usize,
    /// Renames skipped because the destination already existed.
    pub skipped_existing: Vec<String>,
    pub markdown_canonicalized: usize,
    pub images_renamed: usize,
    pub links_rewritten: usize,
    /// Folders that failed mid-step; the run continued past them.
    pub errors: Vec<String>,
}

/// Run migration over every post folder under `content_dir`.
pub fn run(content_dir: &Path, slug_map: &SlugMap) -> Result<MigrateReport> {
    let mut report = MigrateReport::default();

    for folder in post_folders(content_dir)? {
        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| folder.display().to_string());

        let folder = match rename_folder(content_dir, &folder, &name, slug_map, &mut report) {
            Ok(path) => path,
            Err(err) => {
                println!("  {} {}: {}", "[ERR]".red(), name, err);
                report.errors.push(format!("{}: {}", name, err));
                continue;
            }
        };

        if let Err(err) = migrate_folder(&folder, &mut report) {
            println!("  {} {}: {}", "[ERR]".red(), folder.display(), err);
            report.errors.push(format!("{}: {}", folder.display(), err));
            continue;
        }
        report.folders_processed += 1;
    }

    Ok(report)
}

/// Apply the slug map to one folder. Returns the path to keep working in —
/// the renamed path, or the original when no rename applies.
fn rename_folder(
    content_dir: &Path,
    folder: &Path,
    name: &str,
    slug_map: &SlugMap,
    report: &mut MigrateReport,
) -> Result<PathBuf> {
    let Some(slug) = slug_map.slug_for(name) else {
        return Ok(folder.to_path_buf());
    };
    if slug == name {
        return Ok(folder.to_path_buf());
    }
    let destination = content_dir.join(slug);
    if destination.exists() {
        // Never merge unrelated content; leave both folders as they are.
        println!(
            "  {} target folder {} already exists, skipping rename of {}",
            "[WARN]".yellow(),
            slug,
            name
        );
        report.skipped_existing.push(name.to_string());
        return Ok(folder.to_path_buf());
    }
    fs::rename(folder, &destination)
        .with_context(|| format!("renaming {} -> {}", name, slug))?;
    println!("  renamed folder {} -> {}", name, slug);
    report.folders_renamed += 1;
    Ok(destination)
}

/// Canonicalize one folder: Markdown filename, image names, link targets.
fn migrate_folder(folder: &Path, report: &mut MigrateReport) -> Result<()> {
    if canonicalize_markdown(folder)? {
        report.markdown_canonicalized += 1;
    }

    let renames = canonicalize_images(folder)?;
    report.images_renamed += renames.iter().filter(|(old, new)| old != new).count();

    let md_path = folder.join(CANONICAL_MARKDOWN);
    if md_path.is_file() && !renames.is_empty() {
        let content = fs::read_to_string(&md_path)?;
        let rewritten = links::rewrite_links(&content, &renames);
        if rewritten != content {
            fs::write(&md_path, rewritten)?;
            report.links_rewritten += 1;
        }
    }
    Ok(())
}

/// Ensure the folder's Markdown lives at the canonical name.
///
/// A differently-named `.md` file is renamed to `index.md` only when no
/// canonical file exists yet; language variants (`index.<lang>.md`) are
/// never candidates. Returns true when a rename happened.
fn canonicalize_markdown(folder: &Path) -> Result<bool> {
    let names = file_names(folder)?;
    if names.iter().any(|n| n == CANONICAL_MARKDOWN) {
        return Ok(false);
    }
    let candidate = names
        .iter()
        .find(|n| n.ends_with(".md") && !n.starts_with("index."));
    let Some(candidate) = candidate else {
        return Ok(false);
    };
    fs::rename(folder.join(candidate), folder.join(CANONICAL_MARKDOWN))
        .with_context(|| format!("renaming {} -> {}", candidate, CANONICAL_MARKDOWN))?;
    Ok(true)
}

/// Rename non-canonical images to `image-<n>.<ext>` and return the full
/// old-name -> new-name map (canonical names map to themselves, so link
/// rewriting sees every image the folder holds).
fn canonicalize_images(folder: &Path) -> Result<BTreeMap<String, String>> {
    let mut names = file_names(folder)?;
    let mut renames = BTreeMap::new();

    let images: Vec<String> = names.iter().filter(|n| is_image_file(n)).cloned().collect();
    for image in images {
        if is_canonical_image(&image) {
            renames.insert(image.clone(), image);
            continue;
        }
        let ext = image
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let new_name = links::next_canonical_name(&names, &ext);
        fs::rename(folder.join(&image), folder.join(&new_name))
            .with_context(|| format!("renaming {} -> {}", image, new_name))?;
        names.push(new_name.clone());
        renames.insert(image, new_name);
    }
    Ok(renames)
}

pub fn print_summary(report: &MigrateReport) {
    println!(
        "  folders: {} processed, {} renamed, {} skipped",
        report.folders_processed,
        report.folders_renamed,
        report.skipped_existing.len()
    );
    println!(
        "  assets: {} markdown canonicalized, {} images renamed, {} files relinked",
        report.markdown_canonicalized, report.images_renamed, report.links_rewritten
    );
    if !report.errors.is_empty() {
        println!("  {} {} folder(s) failed", "[WARN]".yellow(), report.errors.len());
    }
    println!();
}
