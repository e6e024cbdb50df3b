// SPDX-License-Identifier: PMPL-1.0-or-later

//! Offline content pipeline: batch normalization of post asset folders and
//! regeneration of the post index.
//!
//! Every operation is independently invocable, idempotent, and best-effort:
//! a folder that fails one step is logged and skipped, the run continues,
//! and rerunning after a partial completion converges on the same result.
//! There is deliberately no transactional rollback — the recoverability
//! model is "safe to rerun", not "atomic".

pub mod index;
pub mod links;
pub mod migrate;

use crate::types::PostIndex;
use anyhow::{bail, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerate post folders (immediate subdirectories) in sorted name order.
///
/// Sorted order keeps every downstream step deterministic, including the
/// synthetic date assignment in index generation.
pub fn post_folders(content_dir: &Path) -> Result<Vec<PathBuf>> {
    if !content_dir.is_dir() {
        bail!("content directory not found: {}", content_dir.display());
    }
    let mut folders: Vec<PathBuf> = WalkDir::new(content_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect();
    folders.sort();
    Ok(folders)
}

/// File names (not paths) inside a folder, sorted.
pub(crate) fn file_names(folder: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    Ok(names)
}

/// Run the full pipeline: migrate, broken-link sweep, cleanup, index
/// generation. Each phase is the same code the standalone subcommands run.
pub fn run_all(content_dir: &Path, slug_map: &migrate::SlugMap, output: &Path) -> Result<PostIndex> {
    println!("{}", "Phase 1: Folder & Asset Migration".bold().cyan());
    let report = migrate::run(content_dir, slug_map)?;
    migrate::print_summary(&report);

    println!("{}", "Phase 2: Broken Link Sweep".bold().cyan());
    let swept = links::sweep_tree(content_dir)?;
    println!("  removed {} broken reference(s)\n", swept);

    println!("{}", "Phase 3: Markdown Cleanup".bold().cyan());
    let cleaned = links::cleanup_tree(content_dir)?;
    println!("  rewrote {} file(s)\n", cleaned);

    println!("{}", "Phase 4: Post Index Generation".bold().cyan());
    let index = index::generate(content_dir)?;
    index.save(output)?;
    println!(
        "  {} post(s) -> {}\n",
        index.posts.len(),
        output.display()
    );

    Ok(index)
}
